use crate::schema::WebshellConfig;

pub(crate) fn validate_shell(errors: &mut Vec<String>, config: &WebshellConfig) {
    if config.shell.user_agent.trim().is_empty() {
        errors.push("shell.user_agent is empty".into());
    }
}
