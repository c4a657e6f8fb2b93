use crate::ui::auth_form::intent::AuthFormIntent;
use crate::ui::auth_form::state::AuthFormState;
use crate::ui::mvi::Reducer;

pub struct AuthFormReducer;

impl Reducer for AuthFormReducer {
    type State = AuthFormState;
    type Intent = AuthFormIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            AuthFormIntent::Load { screen } => AuthFormState::for_screen(screen),
            AuthFormIntent::Clear => AuthFormState::for_screen(state.screen),
            AuthFormIntent::Insert(ch) => {
                if let Some(field) = state.fields.get_mut(state.focused) {
                    field.value.push(ch);
                    // Editing a field clears its message.
                    field.error = None;
                }
                state
            }
            AuthFormIntent::DeleteBack => {
                if let Some(field) = state.fields.get_mut(state.focused) {
                    field.value.pop();
                    field.error = None;
                }
                state
            }
            AuthFormIntent::FocusNext => {
                let len = state.fields.len();
                if len > 0 {
                    state.focused = (state.focused + 1) % len;
                }
                state
            }
            AuthFormIntent::FocusPrev => {
                let len = state.fields.len();
                if len > 0 {
                    state.focused = (state.focused + len - 1) % len;
                }
                state
            }
            AuthFormIntent::Validate => {
                for field in &mut state.fields {
                    field.error = field.kind.check(&field.value).map(str::to_string);
                }
                if let Some(first_invalid) = state.fields.iter().position(|f| f.error.is_some()) {
                    state.focused = first_invalid;
                }
                state
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::auth_form::state::{AuthScreen, FieldKind};

    fn typed(state: AuthFormState, text: &str) -> AuthFormState {
        text.chars().fold(state, |state, ch| {
            AuthFormReducer::reduce(state, AuthFormIntent::Insert(ch))
        })
    }

    #[test]
    fn typing_goes_to_focused_field() {
        let state = typed(AuthFormState::default(), "asha@example.com");
        let state = AuthFormReducer::reduce(state, AuthFormIntent::FocusNext);
        let state = typed(state, "pw");
        assert_eq!(state.value(FieldKind::Email), "asha@example.com");
        assert_eq!(state.value(FieldKind::Password), "pw");
    }

    #[test]
    fn validate_flags_and_focuses_first_invalid() {
        let state = AuthFormState::for_screen(AuthScreen::SignUp);
        let state = AuthFormReducer::reduce(state, AuthFormIntent::FocusNext);
        let state = typed(state, "not-an-email");
        let state = AuthFormReducer::reduce(state, AuthFormIntent::Validate);

        assert!(state.has_errors());
        assert_eq!(state.focused, 0);
        assert_eq!(state.fields[0].error.as_deref(), Some("Name is required"));
        assert_eq!(
            state.fields[1].error.as_deref(),
            Some("Please enter a valid email address")
        );
        assert_eq!(state.fields[2].error.as_deref(), Some("Password is required"));
    }

    #[test]
    fn editing_clears_field_error() {
        let state = AuthFormReducer::reduce(AuthFormState::default(), AuthFormIntent::Validate);
        assert!(state.fields[0].error.is_some());
        let state = typed(state, "a");
        assert!(state.fields[0].error.is_none());
        assert!(state.fields[1].error.is_some());
    }

    #[test]
    fn focus_wraps_backwards() {
        let state = AuthFormReducer::reduce(AuthFormState::default(), AuthFormIntent::FocusPrev);
        assert_eq!(state.focused, 1);
    }
}
