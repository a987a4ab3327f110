use crate::ui::appearance::intent::AppearanceIntent;
use crate::ui::appearance::state::AppearanceState;
use crate::ui::mvi::Reducer;

pub struct AppearanceReducer;

impl Reducer for AppearanceReducer {
    type State = AppearanceState;
    type Intent = AppearanceIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            AppearanceIntent::Toggle => AppearanceState {
                theme: state.theme.toggle(),
                toggles: state.toggles.saturating_add(1),
            },
            AppearanceIntent::Set(theme) => AppearanceState { theme, ..state },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Theme;

    #[test]
    fn toggle_flips_and_counts() {
        let state = AppearanceReducer::reduce(
            AppearanceState::new(Theme::Light),
            AppearanceIntent::Toggle,
        );
        assert_eq!(state.theme, Theme::Dark);
        assert_eq!(state.toggles, 1);
    }

    #[test]
    fn set_keeps_toggle_count() {
        let state = AppearanceState {
            theme: Theme::Dark,
            toggles: 3,
        };
        let state = AppearanceReducer::reduce(state, AppearanceIntent::Set(Theme::Light));
        assert_eq!(state.theme, Theme::Light);
        assert_eq!(state.toggles, 3);
    }
}
