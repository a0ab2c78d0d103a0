//! Checks the SoC feature chain in this crate's manifest.  Cargo only accepts
//! feature names made of alphanumerics, `_`, `-` and `+`, so the chain uses
//! `-` between the level and the part name.

const MANIFEST: &str = include_str!("../Cargo.toml");

/// `(name, enables)` for each entry of the `[features]` table.
fn features() -> Vec<(&'static str, Vec<&'static str>)> {
    MANIFEST
        .lines()
        .map(str::trim)
        .skip_while(|l| *l != "[features]")
        .skip(1)
        .take_while(|l| !l.starts_with('['))
        .filter(|l| !l.is_empty() && !l.starts_with('#'))
        .filter_map(|l| l.split_once('='))
        .map(|(name, list)| {
            let enables = list
                .trim()
                .trim_start_matches('[')
                .trim_end_matches(']')
                .split(',')
                .map(|f| f.trim().trim_matches('"'))
                .filter(|f| !f.is_empty())
                .collect();
            (name.trim().trim_matches('"'), enables)
        })
        .collect()
}

fn enables(name: &str) -> Vec<&'static str> {
    features()
        .into_iter()
        .find(|(n, _)| *n == name)
        .map(|(_, e)| e)
        .unwrap_or_else(|| panic!("no feature {}", name))
}

#[test]
fn feature_names_are_accepted_by_cargo() {
    let features = features();
    assert!(!features.is_empty());
    for (name, _) in features {
        assert!(
            name.chars().all(|c| c.is_ascii_alphanumeric() || "_-+".contains(c)),
            "feature {:?}",
            name
        );
    }
}

#[test]
fn soc_feature_chain_reaches_the_cpu() {
    assert_eq!(enables("default"), ["soc-mspm0g3507"]);
    assert_eq!(enables("soc-mspm0g3507"), ["soc_family-mspm0g"]);
    assert_eq!(enables("soc_family-mspm0g"), ["cpu-cortex-m0plus"]);
    assert!(enables("cpu-cortex-m0plus").is_empty());
}

#[test]
fn sources_gate_on_the_soc_feature() {
    for src in [
        include_str!("../src/lib.rs"),
        include_str!("../src/arm_m/startup.rs"),
    ] {
        assert!(src.contains("#[cfg(feature = \"soc-mspm0g3507\")]"));
        assert!(!src.contains("soc:"));
    }
}
