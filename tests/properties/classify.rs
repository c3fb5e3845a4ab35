//! Property tests for the name classifier.

use proptest::prelude::*;

use eastward::domain::value_objects::{classify, Category};

/// Names built from lowercase text never contain an uppercase keyword
fn lowercase_name() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[a-z0-9_.-]{0,32}").unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: classify never panics and is deterministic.
    #[test]
    fn property_classify_total(name in "(?s).{0,128}") {
        prop_assert_eq!(classify(&name), classify(&name));
    }

    /// PROPERTY: Matching is case-sensitive; lowercase names are generic.
    #[test]
    fn property_lowercase_is_generic(name in lowercase_name()) {
        prop_assert_eq!(classify(&name), Category::Generic);
    }

    /// PROPERTY: MANIFESTO or PROTOCOL anywhere wins over every later rule.
    #[test]
    fn property_manifesto_rule_wins(
        prefix in lowercase_name(),
        suffix in lowercase_name(),
        keyword in prop_oneof![Just("MANIFESTO"), Just("PROTOCOL")],
        extra in prop_oneof![Just(""), Just("DISCOGRAPHY"), Just("README"), Just("ALBUM")]
    ) {
        let name = format!("{}{}{}{}", prefix, extra, keyword, suffix);
        prop_assert_eq!(classify(&name), Category::Manifesto);
    }

    /// PROPERTY: DISCOGRAPHY or ALBUM beats README.
    #[test]
    fn property_discography_beats_readme(
        prefix in lowercase_name(),
        keyword in prop_oneof![Just("DISCOGRAPHY"), Just("ALBUM")]
    ) {
        let name = format!("README_{}{}", prefix, keyword);
        prop_assert_eq!(classify(&name), Category::Discography);
    }
}
