//! Login and registration screens.
//!
//! There is no identity backend: submitting either form only reports
//! success to the shell, which then switches to the workspace.

use askama::Template;
use canteiro_core::navigation::ShellAction;
use canteiro_shared::AppResult;

use super::{RenderContext, render};

const FOOTER_LINK: &str = "font-medium text-orange-600 hover:underline";

struct Field {
    name: &'static str,
    label: &'static str,
    kind: &'static str,
}

const LOGIN_FIELDS: &[Field] = &[
    Field {
        name: "email",
        label: "Email",
        kind: "email",
    },
    Field {
        name: "password",
        label: "Palavra-passe",
        kind: "password",
    },
];

const REGISTER_FIELDS: &[Field] = &[
    Field {
        name: "name",
        label: "Nome",
        kind: "text",
    },
    Field {
        name: "company",
        label: "Empresa",
        kind: "text",
    },
    Field {
        name: "email",
        label: "Email",
        kind: "email",
    },
    Field {
        name: "password",
        label: "Palavra-passe",
        kind: "password",
    },
];

#[derive(Template)]
#[template(path = "auth.html")]
struct AuthCard<'a> {
    product: &'a str,
    heading: &'a str,
    state: &'a str,
    fields: &'a [Field],
    submit_token: String,
    submit_label: &'a str,
    footer_text: &'a str,
    footer_button: String,
}

/// Login screen.
pub(super) fn login(ctx: &RenderContext<'_>) -> AppResult<String> {
    render(&AuthCard {
        product: &ctx.ui.product_name,
        heading: "Aceda à sua conta",
        state: ctx.state_json(),
        fields: LOGIN_FIELDS,
        submit_token: ShellAction::Login.token(),
        submit_label: "Entrar",
        footer_text: "Ainda não tem conta?",
        footer_button: ctx.action_button(ShellAction::GoToRegister, FOOTER_LINK, "Criar conta")?,
    })
}

/// Registration screen.
pub(super) fn register(ctx: &RenderContext<'_>) -> AppResult<String> {
    render(&AuthCard {
        product: &ctx.ui.product_name,
        heading: "Crie a conta da sua empresa",
        state: ctx.state_json(),
        fields: REGISTER_FIELDS,
        submit_token: ShellAction::Register.token(),
        submit_label: "Criar conta",
        footer_text: "Já tem conta?",
        footer_button: ctx.action_button(ShellAction::GoToLogin, FOOTER_LINK, "Entrar")?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use canteiro_core::navigation::ShellState;
    use canteiro_shared::config::UiConfig;

    #[test]
    fn test_login_has_both_callbacks() {
        let ui = UiConfig::default();
        let ctx = RenderContext::new(ShellState::default(), &ui).unwrap();
        let html = login(&ctx).unwrap();
        assert!(html.contains(r#"value="login""#));
        assert!(html.contains(r#"value="go-to-register""#));
        assert!(html.contains(r#"name="password""#));
    }

    #[test]
    fn test_register_has_both_callbacks() {
        let ui = UiConfig::default();
        let ctx = RenderContext::new(ShellState::default(), &ui).unwrap();
        let html = register(&ctx).unwrap();
        assert!(html.contains(r#"value="register""#));
        assert!(html.contains(r#"value="go-to-login""#));
        assert!(html.contains(r#"name="company""#));
    }
}
