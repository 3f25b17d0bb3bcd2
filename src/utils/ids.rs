use rand::distributions::Uniform;
use rand::Rng;

const ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";

/// Random id of lowercase letters and digits.
pub fn random_id(len: usize) -> String {
    let mut rng = rand::thread_rng();
    let dist = Uniform::from(0..ALPHABET.len());
    (0..len).map(|_| ALPHABET[rng.sample(dist)] as char).collect()
}

/// `<agent>-<8 random>`, used when `runtime_name` is `Auto`.
pub fn runtime_name(agent_name: &str) -> String {
    format!("{}-{}", agent_name, random_id(8))
}

pub fn role_name() -> String {
    format!("AgentKit-Runtime-Default-ServiceRole-{}", random_id(7))
}

pub fn api_key_name() -> String {
    format!("API-KEY-{}", random_id(8))
}

/// Idempotency token for create/update calls.
pub fn client_token() -> String {
    random_id(16)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_id_alphabet() {
        let id = random_id(64);
        assert_eq!(id.len(), 64);
        assert!(id.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit()));
    }

    #[test]
    fn test_generated_names() {
        let name = runtime_name("demo");
        assert!(name.starts_with("demo-"));
        assert_eq!(name.len(), "demo-".len() + 8);

        assert!(role_name().starts_with("AgentKit-Runtime-Default-ServiceRole-"));
        assert_eq!(api_key_name().len(), "API-KEY-".len() + 8);
        assert_eq!(client_token().len(), 16);
        assert_ne!(client_token(), client_token());
    }
}
