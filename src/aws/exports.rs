use super::Credentials;

/// Shell `export` statements for the present credential fields, in output order
pub fn render_exports(creds: &Credentials) -> Vec<String> {
    creds
        .present_fields()
        .map(|(field, value)| format!("export {}={}", field.env_var(), value))
        .collect()
}
