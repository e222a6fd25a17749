use rand::rng;
use rand::seq::IndexedRandom;

/// URL-safe alphabet, 64 symbols.
const ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ_-";

pub const ID_LEN: usize = 10;

/// Generates a short random identifier. Uniqueness is enforced by the store's
/// primary key, not here.
pub fn generate_id() -> String {
    let mut rng = rng();
    (0..ID_LEN)
        .filter_map(|_| ALPHABET.choose(&mut rng))
        .map(|&b| char::from(b))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_id_shape() {
        let id = generate_id();
        assert_eq!(id.len(), ID_LEN);
        assert!(id.bytes().all(|b| ALPHABET.contains(&b)));
    }

    #[test]
    fn test_ids_do_not_repeat() {
        let ids: HashSet<String> = (0..1000).map(|_| generate_id()).collect();
        assert_eq!(ids.len(), 1000);
    }
}
