use axum::response::Html;
use minijinja::{Environment, Value};

use crate::error::AppError;

/// Builds the template environment with every page embedded at compile time.
/// `.html` names keep minijinja's HTML auto-escaping active, so values such
/// as the session username are escaped before display.
pub fn build() -> Environment<'static> {
    let mut env = Environment::new();

    let pages = [
        ("static.html", include_str!("../../templates/static.html")),
        ("jinja2.html", include_str!("../../templates/jinja2.html")),
        ("form.html", include_str!("../../templates/form.html")),
        ("get.html", include_str!("../../templates/get.html")),
        ("post.html", include_str!("../../templates/post.html")),
        ("login.html", include_str!("../../templates/login.html")),
        ("welcome.html", include_str!("../../templates/welcome.html")),
    ];

    for (name, source) in pages {
        env.add_template(name, source)
            .expect("embedded template must parse");
    }

    env
}

pub fn render(env: &Environment<'_>, name: &str, ctx: Value) -> Result<Html<String>, AppError> {
    let page = env.get_template(name)?.render(ctx)?;
    Ok(Html(page))
}

#[cfg(test)]
mod tests {
    use super::*;
    use minijinja::context;

    #[test]
    fn every_page_renders() {
        let env = build();
        for name in [
            "static.html",
            "jinja2.html",
            "form.html",
            "get.html",
            "post.html",
            "login.html",
            "welcome.html",
        ] {
            let ctx = context! {
                title => "t",
                home_str => "s",
                home_list => vec![1, 2, 3, 4, 5],
                userid => "u",
                name => "n",
                email => "e",
                fail => "",
                error => Value::UNDEFINED,
                username => "admin",
            };
            render(&env, name, ctx).expect(name);
        }
    }

    #[test]
    fn welcome_escapes_markup_in_username() {
        let env = build();
        let page = render(
            &env,
            "welcome.html",
            context! { username => "<script>alert(1)</script>" },
        )
        .unwrap();

        assert!(!page.0.contains("<script>"));
        assert!(page.0.contains("&lt;script&gt;"));
    }

    #[test]
    fn login_error_paragraph_only_shows_with_error() {
        let env = build();

        let blank = render(&env, "login.html", context! {}).unwrap();
        assert!(!blank.0.contains("class=\"error\""));

        let with_error = render(&env, "login.html", context! { error => "틀렸습니다" }).unwrap();
        assert!(with_error.0.contains("틀렸습니다"));
    }
}
