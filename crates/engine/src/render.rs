// Placeholder substitution: `{{client.<field>}}` and `{{var.<key>}}`.
//
// The two families deliberately fail differently. Client fields are a fixed
// schema, so an unknown field name keeps its token verbatim and the typo
// stays visible in the output. Variable keys are user-defined, so an absent
// key just means "not filled in" and renders as the missing-value dash.

use std::collections::BTreeMap;

use taskdesk_common::types::Client;

/// Rendered stand-in for a value that is known but not filled in.
pub const MISSING_VALUE: &str = "—";

/// Substitute every placeholder in `text`.
///
/// Whitespace inside the braces is tolerated; field and key names are
/// case-sensitive. One pass, never recursive — substituted values are not
/// rescanned, so a value containing `{{...}}` comes through literally.
pub fn render(text: &str, client: Option<&Client>, vars: &BTreeMap<String, String>) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(start) = rest.find("{{") {
        let Some(len) = rest[start + 2..].find("}}") else {
            break; // unterminated token: the tail is literal text
        };
        out.push_str(&rest[..start]);
        out.push_str(&substitute(&rest[start + 2..start + 2 + len], client, vars));
        rest = &rest[start + 2 + len + 2..];
    }

    out.push_str(rest);
    out
}

fn substitute(token: &str, client: Option<&Client>, vars: &BTreeMap<String, String>) -> String {
    let name = token.trim();

    if let Some(field) = name.strip_prefix("client.") {
        let field = field.trim();
        return match client_field(client, field) {
            Some(value) => value,
            None => format!("{{{{client.{field}}}}}"),
        };
    }

    if let Some(key) = name.strip_prefix("var.") {
        return value_or_dash(vars.get(key.trim()).map(String::as_str));
    }

    // Neither family: keep the token exactly as written.
    format!("{{{{{token}}}}}")
}

/// Resolve a `client.*` field. `None` means the field name itself is
/// unknown; a known field without a value resolves to the dash.
fn client_field(client: Option<&Client>, field: &str) -> Option<String> {
    let value = match field {
        "name" => client.map(|c| Some(c.name.clone())),
        "website_url" => client.map(|c| c.website_url.clone()),
        "wp_admin_url" => client.map(|c| c.wp_admin_url.clone()),
        "drive_folder_url" => client.map(|c| c.drive_folder_url.clone()),
        _ => return None,
    };
    Some(value_or_dash(value.flatten().as_deref()))
}

fn value_or_dash(value: Option<&str>) -> String {
    match value {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => MISSING_VALUE.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn acme() -> Client {
        Client {
            id: Uuid::new_v4(),
            name: "Acme".into(),
            website_url: Some("https://acme.com".into()),
            wp_admin_url: None,
            drive_folder_url: Some("https://drive.example/acme".into()),
        }
    }

    fn vars(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
    }

    #[test]
    fn plain_text_is_untouched() {
        let text = "no tokens here, not even { single } braces";
        assert_eq!(render(text, Some(&acme()), &vars(&[])), text);
    }

    #[test]
    fn client_fields_resolve() {
        assert_eq!(render("{{client.name}}", Some(&acme()), &vars(&[])), "Acme");
        assert_eq!(
            render("Site: {{client.website_url}}", Some(&acme()), &vars(&[])),
            "Site: https://acme.com"
        );
    }

    #[test]
    fn unset_client_field_renders_dash() {
        assert_eq!(render("{{client.wp_admin_url}}", Some(&acme()), &vars(&[])), "—");
    }

    #[test]
    fn no_client_renders_dash_for_known_fields() {
        assert_eq!(render("{{client.name}}", None, &vars(&[])), "—");
    }

    #[test]
    fn unknown_client_field_is_preserved_verbatim() {
        assert_eq!(
            render("{{client.billing_url}}", Some(&acme()), &vars(&[])),
            "{{client.billing_url}}"
        );
        // Whitespace inside the braces is normalized away on preservation.
        assert_eq!(
            render("{{ client.billing_url }}", Some(&acme()), &vars(&[])),
            "{{client.billing_url}}"
        );
    }

    #[test]
    fn variables_resolve_and_absent_keys_render_dash() {
        let v = vars(&[("topic", "Bunker fuel")]);
        assert_eq!(render("{{var.topic}}", None, &v), "Bunker fuel");
        assert_eq!(render("{{var.output}}", None, &v), "—");
    }

    #[test]
    fn empty_variable_value_renders_dash() {
        assert_eq!(render("{{var.topic}}", None, &vars(&[("topic", "")])), "—");
    }

    #[test]
    fn whitespace_inside_braces_is_trimmed() {
        assert_eq!(render("{{ client.name }}", Some(&acme()), &vars(&[])), "Acme");
        assert_eq!(render("{{ var.topic }}", None, &vars(&[("topic", "x")])), "x");
    }

    #[test]
    fn names_are_case_sensitive() {
        assert_eq!(render("{{Client.name}}", Some(&acme()), &vars(&[])), "{{Client.name}}");
        assert_eq!(render("{{var.Topic}}", None, &vars(&[("topic", "x")])), "—");
    }

    #[test]
    fn unrecognized_tokens_pass_through() {
        assert_eq!(render("{{something}}", None, &vars(&[])), "{{something}}");
        assert_eq!(render("{{ spaced }}", None, &vars(&[])), "{{ spaced }}");
    }

    #[test]
    fn unterminated_token_is_literal() {
        assert_eq!(render("open {{client.name", Some(&acme()), &vars(&[])), "open {{client.name");
    }

    #[test]
    fn substitution_is_single_pass() {
        // A substituted value containing a placeholder is never rescanned.
        let v = vars(&[("a", "{{var.b}}"), ("b", "boom")]);
        assert_eq!(render("{{var.a}}", None, &v), "{{var.b}}");
    }

    #[test]
    fn multiple_tokens_in_one_line() {
        let v = vars(&[("topic", "Q1 prices")]);
        assert_eq!(
            render("{{client.name}}: {{var.topic}} ({{var.missing}})", Some(&acme()), &v),
            "Acme: Q1 prices (—)"
        );
    }
}
