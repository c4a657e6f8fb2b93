//! Daily punch-in / punch-out record shown on the dashboard.

use chrono::{NaiveDateTime, TimeDelta};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttendanceStatus {
    NoRecord,
    Working,
    Complete,
}

impl AttendanceStatus {
    pub fn label(self) -> &'static str {
        match self {
            AttendanceStatus::NoRecord => "No Time Record",
            AttendanceStatus::Working => "Currently Working",
            AttendanceStatus::Complete => "Shift Complete",
        }
    }
}

/// Today's shift. Punching in again after a completed shift starts over.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attendance {
    punch_in: Option<NaiveDateTime>,
    punch_out: Option<NaiveDateTime>,
}

impl Attendance {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(&self) -> AttendanceStatus {
        match (self.punch_in, self.punch_out) {
            (None, _) => AttendanceStatus::NoRecord,
            (Some(_), None) => AttendanceStatus::Working,
            (Some(_), Some(_)) => AttendanceStatus::Complete,
        }
    }

    /// Punch in when not working, punch out otherwise.
    pub fn punch(&mut self, now: NaiveDateTime) -> AttendanceStatus {
        if self.status() == AttendanceStatus::Working {
            self.punch_out = Some(now);
            tracing::info!(total = %self.total_label(), "Punched out");
        } else {
            self.punch_in = Some(now);
            self.punch_out = None;
            tracing::info!(at = %format_clock(now), "Punched in");
        }
        self.status()
    }

    /// Worked time of a completed shift; zero otherwise.
    pub fn total(&self) -> TimeDelta {
        match (self.punch_in, self.punch_out) {
            (Some(start), Some(end)) if end > start => end - start,
            _ => TimeDelta::zero(),
        }
    }

    /// `H:MM`.
    pub fn total_label(&self) -> String {
        let minutes = self.total().num_minutes();
        format!("{}:{:02}", minutes / 60, minutes % 60)
    }

    pub fn punch_in_label(&self) -> String {
        self.punch_in
            .map(format_clock)
            .unwrap_or_else(|| "--:--".to_string())
    }

    pub fn punch_out_label(&self) -> String {
        self.punch_out
            .map(format_clock)
            .unwrap_or_else(|| "--:--".to_string())
    }

    /// Caption of the punch action.
    pub fn action_label(&self) -> &'static str {
        if self.status() == AttendanceStatus::Working {
            "Punch Out"
        } else {
            "Punch In"
        }
    }
}

/// 12-hour clock, e.g. `9:05 AM`.
pub fn format_clock(time: NaiveDateTime) -> String {
    time.format("%-I:%M %p").to_string()
}
