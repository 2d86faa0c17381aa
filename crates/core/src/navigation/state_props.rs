//! Property-based tests for the shell reducer.

use proptest::prelude::*;

use super::action::ShellAction;
use super::dispatch::Page;
use super::state::{AuthView, ShellState};
use super::view::View;

fn arb_view() -> impl Strategy<Value = View> {
    proptest::sample::select(View::ALL.to_vec())
}

fn arb_auth_view() -> impl Strategy<Value = AuthView> {
    prop_oneof![
        Just(AuthView::Login),
        Just(AuthView::Register),
        Just(AuthView::App),
    ]
}

fn arb_state() -> impl Strategy<Value = ShellState> {
    (
        arb_auth_view(),
        arb_view(),
        any::<bool>(),
        any::<bool>(),
        any::<bool>(),
    )
        .prop_map(
            |(auth_view, view, mobile_sidebar_open, profile_menu_open, profile_modal_open)| {
                ShellState {
                    auth_view,
                    view,
                    mobile_sidebar_open,
                    profile_menu_open,
                    profile_modal_open,
                }
            },
        )
}

fn arb_action() -> impl Strategy<Value = ShellAction> {
    prop_oneof![
        Just(ShellAction::Login),
        Just(ShellAction::Register),
        Just(ShellAction::Logout),
        Just(ShellAction::GoToRegister),
        Just(ShellAction::GoToLogin),
        arb_view().prop_map(ShellAction::Navigate),
        Just(ShellAction::ToggleMobileSidebar),
        Just(ShellAction::CloseMobileSidebar),
        Just(ShellAction::ToggleProfileMenu),
        Just(ShellAction::CloseProfileMenu),
        Just(ShellAction::OpenProfileModal),
        Just(ShellAction::CloseProfileModal),
        Just(ShellAction::OpenCompanySettings),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(300))]

    /// Same state and action always give the same next state.
    #[test]
    fn prop_apply_is_deterministic(state in arb_state(), action in arb_action()) {
        prop_assert_eq!(state.apply(action), state.apply(action));
    }

    /// Navigating in the workspace always lands on the requested view.
    #[test]
    fn prop_navigate_sets_view(state in arb_state(), view in arb_view()) {
        let signed_in = ShellState { auth_view: AuthView::App, ..state };
        let next = signed_in.apply(ShellAction::Navigate(view));
        prop_assert_eq!(next.view, view);
        prop_assert!(!next.profile_menu_open);
        prop_assert!(!next.mobile_sidebar_open);
    }

    /// Logging out from anywhere in the workspace resets everything.
    #[test]
    fn prop_logout_resets(state in arb_state()) {
        let signed_in = ShellState { auth_view: AuthView::App, ..state };
        prop_assert_eq!(signed_in.apply(ShellAction::Logout), ShellState::default());
    }

    /// Outside the workspace only auth transitions change the state.
    #[test]
    fn prop_signed_out_only_moves_auth(state in arb_state(), action in arb_action()) {
        prop_assume!(state.auth_view != AuthView::App);
        let next = state.apply(action);
        if next.auth_view == state.auth_view {
            prop_assert_eq!(next, state);
        }
    }

    /// Every reachable state maps to a page, and the page follows the auth mode.
    #[test]
    fn prop_page_follows_auth_view(
        start in arb_state(),
        actions in proptest::collection::vec(arb_action(), 0..20),
    ) {
        let state = actions.into_iter().fold(start, ShellState::apply);
        let page = Page::for_state(&state);
        match state.auth_view {
            AuthView::Login => prop_assert_eq!(page, Page::Login),
            AuthView::Register => prop_assert_eq!(page, Page::Register),
            AuthView::App => prop_assert!(matches!(page, Page::Workspace(_))),
        }
    }
}
