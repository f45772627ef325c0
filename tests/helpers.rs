use subrand::RandomError;
use subrand::helpers::{DEFAULT_CHARSET, DEFAULT_MIN_ID, get_id, get_nonce, get_random_string};
use subrand::rng::{Ambient, MAX_SAFE_INTEGER, Prng, RandomSource};

fn is_base36(s: &str) -> bool {
    s.chars().all(|c| c.is_ascii_digit() || c.is_ascii_lowercase())
}

#[test]
fn nonce_golden_seed_42() {
    let mut rng = Prng::from_seed(42);
    assert_eq!(get_nonce(10, &mut rng), "o1v6b5kags");

    let mut rng = Prng::from_seed(42);
    assert_eq!(get_nonce(32, &mut rng), "o1v6b5kags52m65i42aa4io6izbr55it");
}

#[test]
fn nonce_golden_seed_7() {
    let mut rng = Prng::from_seed(7);
    assert_eq!(get_nonce(25, &mut rng), "dsnj8ccjafvd5azgacnbnskr3");
}

#[test]
fn nonce_is_reproducible_for_equal_seeds() {
    let a = get_nonce(10, &mut Prng::from_seed(31337));
    let b = get_nonce(10, &mut Prng::from_seed(31337));

    assert_eq!(a.len(), 10);
    assert!(is_base36(&a));
    assert_eq!(a, b);
}

#[test]
fn nonce_lengths_are_exact() {
    let mut rng = Prng::from_seed(1);

    for length in [1, 9, 10, 11, 64, 257] {
        let nonce = get_nonce(length, &mut rng);
        assert_eq!(nonce.len(), length);
        assert!(is_base36(&nonce));
    }
}

#[test]
fn zero_length_nonce_consumes_nothing() {
    let mut used = Prng::from_seed(5);
    let mut fresh = Prng::from_seed(5);

    assert_eq!(get_nonce(0, &mut used), "");
    assert_eq!(used.next_integer(), fresh.next_integer());
}

#[test]
fn ambient_nonce() {
    let nonce = get_nonce(40, &mut Ambient);

    assert_eq!(nonce.len(), 40);
    assert!(is_base36(&nonce));
}

#[test]
fn random_string_golden() {
    let mut rng = Prng::from_seed(42);
    assert_eq!(get_random_string(8, &mut rng, "ab").unwrap(), "baabaabb");

    let mut rng = Prng::from_seed(42);
    assert_eq!(
        get_random_string(12, &mut rng, DEFAULT_CHARSET).unwrap(),
        "keepiospisoo"
    );
}

#[test]
fn random_string_uses_only_charset() {
    let mut rng = Prng::from_seed(77);
    let s = get_random_string(500, &mut rng, "ab").unwrap();

    assert_eq!(s.len(), 500);
    assert!(s.chars().all(|c| c == 'a' || c == 'b'));
    assert!(s.contains('a') && s.contains('b'));
}

#[test]
fn random_string_picks_whole_characters() {
    let mut rng = Prng::from_seed(3);
    let s = get_random_string(20, &mut rng, "αβγ").unwrap();

    assert_eq!(s.chars().count(), 20);
    assert!(s.chars().all(|c| "αβγ".contains(c)));
}

#[test]
fn random_string_edge_cases() {
    let mut rng = Prng::from_seed(3);

    assert_eq!(get_random_string(0, &mut rng, "").unwrap(), "");
    assert_eq!(get_random_string(0, &mut rng, "xyz").unwrap(), "");
    assert_eq!(
        get_random_string(4, &mut rng, ""),
        Err(RandomError::EmptyCharset)
    );
    assert_eq!(get_random_string(4, &mut rng, "q").unwrap(), "qqqq");
}

#[test]
fn ambient_random_string() {
    let s = get_random_string(16, &mut Ambient, DEFAULT_CHARSET).unwrap();

    assert_eq!(s.len(), 16);
    assert!(s.chars().all(|c| DEFAULT_CHARSET.contains(c)));
}

#[test]
fn seeded_id_follows_next_long() {
    let mut rng = Prng::from_seed(42);
    assert_eq!(get_id(100, &mut rng).unwrap(), 4309105566363031458);

    let mut rng = Prng::from_seed(42);
    let mut reference = Prng::from_seed(42);
    assert_eq!(
        get_id(DEFAULT_MIN_ID, &mut rng).unwrap(),
        reference.next_long() + DEFAULT_MIN_ID
    );
}

#[test]
fn seeded_ids_respect_minimum() {
    let mut rng = Prng::from_seed(8);

    for _ in 0..1_000 {
        assert!(get_id(100, &mut rng).unwrap() >= 100);
    }
}

#[test]
fn ambient_ids_stay_within_safe_integers() {
    for _ in 0..1_000 {
        let id = get_id(DEFAULT_MIN_ID, &mut Ambient).unwrap();
        assert!((DEFAULT_MIN_ID..=MAX_SAFE_INTEGER).contains(&id));
    }

    assert_eq!(
        get_id(MAX_SAFE_INTEGER, &mut Ambient).unwrap(),
        MAX_SAFE_INTEGER
    );
    assert!(matches!(
        get_id(MAX_SAFE_INTEGER + 1, &mut Ambient),
        Err(RandomError::InvalidRange { .. })
    ));
}

#[test]
fn helpers_accept_trait_objects() {
    let mut seeded = Prng::from_seed(42);
    let mut ambient = Ambient;

    let sources: [&mut dyn RandomSource; 2] = [&mut seeded, &mut ambient];
    for source in sources {
        assert_eq!(get_nonce(12, source).len(), 12);
    }
}

#[test]
fn ambient_doubles_are_in_unit_interval() {
    let mut ambient = Ambient;

    for _ in 0..10_000 {
        let v = ambient.next_double();
        assert!((0.0..1.0).contains(&v));
    }
}
