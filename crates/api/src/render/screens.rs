//! Workspace screens.

use askama::Template;
use canteiro_core::dashboard::DashboardOverview;
use canteiro_core::navigation::{Screen, ShellAction, View};
use canteiro_shared::AppResult;

use super::{RenderContext, dashboard, render};

/// Mount point for a module screen. The module fills it client-side.
#[derive(Template)]
#[template(path = "screens/module.html")]
struct ModuleFrame {
    slug: &'static str,
    label: &'static str,
}

#[derive(Template)]
#[template(path = "screens/invoicing.html")]
struct InvoicingPlaceholder<'a> {
    product: &'a str,
    back: String,
}

#[derive(Template)]
#[template(path = "screens/under_construction.html")]
struct UnderConstruction<'a> {
    label: &'a str,
}

/// Renders the content area for a screen.
pub(super) fn render_screen(ctx: &RenderContext<'_>, screen: &Screen) -> AppResult<String> {
    match screen {
        Screen::Overview => dashboard::overview(ctx, &DashboardOverview::mock()),
        Screen::Module { view } => render(&ModuleFrame {
            slug: view.slug(),
            label: view.label(),
        }),
        Screen::InvoicingPlaceholder => render(&InvoicingPlaceholder {
            product: &ctx.ui.product_name,
            back: ctx.action_button(
                ShellAction::Navigate(View::Dashboard),
                "rounded-lg border border-orange-300 bg-white px-4 py-2 text-sm font-medium text-orange-700",
                "Voltar ao painel",
            )?,
        }),
        Screen::UnderConstruction { label } => render(&UnderConstruction { label }),
    }
}
