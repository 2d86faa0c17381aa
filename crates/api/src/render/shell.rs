//! Workspace shell: sidebar, header, profile dropdown and profile modal.

use askama::Template;
use canteiro_core::navigation::{Screen, ShellAction, View};
use canteiro_shared::AppResult;

use super::{RenderContext, render, screens};

const NAV_ACTIVE: &str =
    "w-full text-left rounded-lg px-3 py-2 text-sm font-medium bg-orange-600 text-white";
const NAV_IDLE: &str =
    "w-full text-left rounded-lg px-3 py-2 text-sm hover:bg-slate-800 hover:text-white";
const MENU_ITEM: &str = "block w-full text-left px-4 py-2 text-sm hover:bg-slate-50";
const AVATAR: &str = "mr-2 flex h-8 w-8 items-center justify-center rounded-full bg-orange-100 text-sm font-semibold text-orange-700";

#[derive(Template)]
#[template(path = "workspace.html")]
struct Workspace<'a> {
    backdrop: String,
    sidebar_class: &'a str,
    product: &'a str,
    company: &'a str,
    nav: Vec<String>,
    hamburger: String,
    title: &'a str,
    settings: String,
    avatar: String,
    profile_menu: String,
    content: String,
    profile_modal: String,
}

#[derive(Template)]
#[template(path = "profile_menu.html")]
struct ProfileMenu<'a> {
    overlay: String,
    name: &'a str,
    role: &'a str,
    entries: Vec<String>,
    logout: String,
}

#[derive(Template)]
#[template(path = "profile_modal.html")]
struct ProfileModal<'a> {
    close: String,
    initials: &'a str,
    name: &'a str,
    role: &'a str,
    company: &'a str,
}

/// Renders the signed-in shell around `screen`.
pub(super) fn workspace(ctx: &RenderContext<'_>, screen: &Screen) -> AppResult<String> {
    let state = ctx.state;

    let backdrop = if state.mobile_sidebar_open {
        ctx.action_button(
            ShellAction::CloseMobileSidebar,
            "fixed inset-0 z-20 bg-slate-900/40 lg:hidden",
            "",
        )?
    } else {
        String::new()
    };

    let nav = View::ALL
        .into_iter()
        .map(|view| {
            let class = if view == state.view { NAV_ACTIVE } else { NAV_IDLE };
            ctx.action_button(ShellAction::Navigate(view), class, view.label())
        })
        .collect::<AppResult<Vec<_>>>()?;

    let initials = ctx.ui.user_initials();

    render(&Workspace {
        backdrop,
        sidebar_class: if state.mobile_sidebar_open {
            "flex"
        } else {
            "hidden lg:flex"
        },
        product: &ctx.ui.product_name,
        company: &ctx.ui.company_name,
        nav,
        hamburger: ctx.action_button(
            ShellAction::ToggleMobileSidebar,
            "lg:hidden rounded-lg p-2 hover:bg-slate-100",
            "☰",
        )?,
        title: state.view.label(),
        settings: ctx.action_button(
            ShellAction::OpenCompanySettings,
            "rounded-lg p-2 hover:bg-slate-100",
            "⚙",
        )?,
        avatar: ctx.icon_button(
            ShellAction::ToggleProfileMenu,
            "flex items-center rounded-lg p-1 pr-3 text-sm font-medium hover:bg-slate-100",
            &initials,
            AVATAR,
            &ctx.ui.user_name,
        )?,
        profile_menu: if state.profile_menu_open {
            profile_menu(ctx)?
        } else {
            String::new()
        },
        content: screens::render_screen(ctx, screen)?,
        profile_modal: if state.profile_modal_open {
            profile_modal(ctx, &initials)?
        } else {
            String::new()
        },
    })
}

/// Dropdown plus the invisible full-viewport overlay that closes it.
fn profile_menu(ctx: &RenderContext<'_>) -> AppResult<String> {
    render(&ProfileMenu {
        overlay: ctx.action_button(
            ShellAction::CloseProfileMenu,
            "fixed inset-0 z-30 h-full w-full cursor-default",
            "",
        )?,
        name: &ctx.ui.user_name,
        role: &ctx.ui.user_role,
        entries: vec![
            ctx.action_button(ShellAction::OpenProfileModal, MENU_ITEM, "O meu perfil")?,
            ctx.action_button(
                ShellAction::OpenCompanySettings,
                MENU_ITEM,
                View::CompanySettings.label(),
            )?,
            ctx.action_button(
                ShellAction::Navigate(View::Support),
                MENU_ITEM,
                View::Support.label(),
            )?,
        ],
        logout: ctx.action_button(
            ShellAction::Logout,
            "block w-full text-left px-4 py-2 text-sm text-red-600 hover:bg-red-50",
            "Terminar sessão",
        )?,
    })
}

fn profile_modal(ctx: &RenderContext<'_>, initials: &str) -> AppResult<String> {
    render(&ProfileModal {
        close: ctx.action_button(
            ShellAction::CloseProfileModal,
            "rounded-lg p-2 text-slate-500 hover:bg-slate-100",
            "✕",
        )?,
        initials,
        name: &ctx.ui.user_name,
        role: &ctx.ui.user_role,
        company: &ctx.ui.company_name,
    })
}
