use crate::nav::route::normalize;
use crate::ui::mvi::UiState;

/// Screens of the unauthenticated section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthScreen {
    #[default]
    SignIn,
    SignUp,
    ForgotPassword,
}

impl AuthScreen {
    const SIGN_UP_SEGMENT: &'static str = "signup";
    const FORGOT_SEGMENT: &'static str = "forgot-password";

    /// Screen shown at `location`, if it is one of the auth screens.
    pub fn from_location(entry_path: &str, location: &str) -> Option<Self> {
        let entry = normalize(entry_path);
        let location = normalize(location);
        if location == entry {
            return Some(AuthScreen::SignIn);
        }
        let rest = location.strip_prefix(entry)?;
        let rest = if entry == "/" { rest } else { rest.strip_prefix('/')? };
        match rest {
            Self::SIGN_UP_SEGMENT => Some(AuthScreen::SignUp),
            Self::FORGOT_SEGMENT => Some(AuthScreen::ForgotPassword),
            _ => None,
        }
    }

    pub fn path(self, entry_path: &str) -> String {
        let entry = normalize(entry_path);
        let segment = match self {
            AuthScreen::SignIn => return entry.to_string(),
            AuthScreen::SignUp => Self::SIGN_UP_SEGMENT,
            AuthScreen::ForgotPassword => Self::FORGOT_SEGMENT,
        };
        if entry == "/" {
            format!("/{segment}")
        } else {
            format!("{entry}/{segment}")
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            AuthScreen::SignIn => "Sign In",
            AuthScreen::SignUp => "Create Account",
            AuthScreen::ForgotPassword => "Forgot Password",
        }
    }

    pub fn submit_label(self) -> &'static str {
        match self {
            AuthScreen::SignIn => "Login",
            AuthScreen::SignUp => "Sign Up",
            AuthScreen::ForgotPassword => "Reset Password",
        }
    }

    fn fields(self) -> &'static [FieldKind] {
        match self {
            AuthScreen::SignIn => &[FieldKind::Email, FieldKind::Password],
            AuthScreen::SignUp => &[FieldKind::Name, FieldKind::Email, FieldKind::Password],
            AuthScreen::ForgotPassword => &[FieldKind::Email],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Name,
    Email,
    Password,
}

impl FieldKind {
    pub fn label(self) -> &'static str {
        match self {
            FieldKind::Name => "Full Name",
            FieldKind::Email => "Email",
            FieldKind::Password => "Password",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            FieldKind::Name => "Enter your name",
            FieldKind::Email => "Enter your email",
            FieldKind::Password => "Enter your Password",
        }
    }

    pub fn is_masked(self) -> bool {
        self == FieldKind::Password
    }

    /// Validation message for `value`, if it is not acceptable.
    pub(super) fn check(self, value: &str) -> Option<&'static str> {
        match self {
            FieldKind::Name if value.trim().is_empty() => Some("Name is required"),
            FieldKind::Email if value.trim().is_empty() => Some("Email is required"),
            FieldKind::Email if !is_valid_email(value.trim()) => {
                Some("Please enter a valid email address")
            }
            FieldKind::Password if value.is_empty() => Some("Password is required"),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormField {
    pub kind: FieldKind,
    pub value: String,
    pub error: Option<String>,
}

impl FormField {
    fn empty(kind: FieldKind) -> Self {
        Self {
            kind,
            value: String::new(),
            error: None,
        }
    }

    /// Value as rendered: masked fields show bullets.
    pub fn display_value(&self) -> String {
        if self.kind.is_masked() {
            "•".repeat(self.value.chars().count())
        } else {
            self.value.clone()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthFormState {
    pub screen: AuthScreen,
    pub fields: Vec<FormField>,
    pub focused: usize,
}

impl Default for AuthFormState {
    fn default() -> Self {
        Self::for_screen(AuthScreen::default())
    }
}

impl UiState for AuthFormState {}

impl AuthFormState {
    pub fn for_screen(screen: AuthScreen) -> Self {
        Self {
            screen,
            fields: screen.fields().iter().copied().map(FormField::empty).collect(),
            focused: 0,
        }
    }

    /// Current value of the field of `kind`, or "" if the screen has none.
    pub fn value(&self, kind: FieldKind) -> &str {
        self.fields
            .iter()
            .find(|field| field.kind == kind)
            .map(|field| field.value.as_str())
            .unwrap_or("")
    }

    pub fn has_errors(&self) -> bool {
        self.fields.iter().any(|field| field.error.is_some())
    }
}

/// `local@domain.tld` with no whitespace.
pub fn is_valid_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}
