/// Render a command line for logs, single-quoting arguments that need it.
///
/// ```
/// use agentkit::utils::shell::display_command;
///
/// assert_eq!(display_command("docker", &["tag", "my app"]), "docker tag 'my app'");
/// ```
pub fn display_command(program: &str, args: &[impl AsRef<str>]) -> String {
    let mut parts = vec![program.to_string()];
    parts.extend(args.iter().map(|arg| quote(arg.as_ref())));
    parts.join(" ")
}

fn quote(arg: &str) -> String {
    let plain = !arg.is_empty()
        && arg
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || "-_./:=@,+%".contains(c));
    if plain {
        arg.to_string()
    } else {
        format!("'{}'", arg.replace('\'', r"'\''"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_args_unquoted() {
        assert_eq!(
            display_command("docker", &["run", "-p", "8000:8000", "--name=demo"]),
            "docker run -p 8000:8000 --name=demo"
        );
    }

    #[test]
    fn test_special_args_quoted() {
        assert_eq!(display_command("sh", &["-c", "echo it's"]), "sh -c 'echo it'\\''s'");
        assert_eq!(display_command("echo", &[""]), "echo ''");
    }
}
