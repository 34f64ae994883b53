extern crate crisplan;

use crisplan::cas::{profile_for, CasProfile};
use crisplan::errors::ErrorKind;
use crisplan::pam::{Pam, Position};

#[test]
fn test_registry_is_case_insensitive() {
    assert_eq!(CasProfile::get("spcas9").map(|p| p.name), Some("SpCas9"));
    assert_eq!(CasProfile::get("SpCas9").map(|p| p.name), Some("SpCas9"));
    assert_eq!(CasProfile::get("SPCAS9").map(|p| p.name), Some("SpCas9"));
    assert_eq!(CasProfile::get("lbcas12a").map(|p| p.name), Some("LbCas12a"));
    assert_eq!(CasProfile::get("LwCas13a").map(|p| p.name), Some("LwCas13a"));
}

#[test]
fn test_registry_covers_all_six_systems() {
    for name in CasProfile::names().iter() {
        assert!(CasProfile::get(name).is_some(), "missing profile for {}", name);
    }
}

#[test]
fn test_registry_rejects_unknown_systems() {
    assert_eq!(CasProfile::get("Cas9"), None);
    assert_eq!(CasProfile::get("Mad7"), None);
    assert_eq!(CasProfile::get(""), None);

    let err = profile_for("AsCas12f").unwrap_err();
    match err.kind() {
        ErrorKind::UnsupportedSystem(name) => assert_eq!(name.as_str(), "AsCas12f"),
        other => panic!("unexpected error kind: {:?}", other),
    }
}

#[test]
fn test_spcas9_targeting_rules() {
    let profile = CasProfile::sp_cas9();

    assert_eq!(profile.pam, Some(Pam::tail(b"NGG")));
    assert_eq!(profile.spacer_len, 20);
    assert_eq!(profile.cutsite, Some(-3));
    assert_eq!(profile.window_len(), 23);
    assert!(profile.both_strands);
    assert!(!profile.targets_rna());
}

#[test]
fn test_cas12a_pams_lead_the_spacer() {
    for profile in &[CasProfile::fn_cas12a(), CasProfile::lb_cas12a()] {
        let pam = profile.pam.as_ref().unwrap();
        assert_eq!(pam.position(), Position::Head);
        assert!(profile.cutsite.unwrap() > 0);
    }
}

#[test]
fn test_cas13_has_no_pam() {
    for profile in &[CasProfile::lsh_cas13a(), CasProfile::lw_cas13a()] {
        assert_eq!(profile.pam, None);
        assert_eq!(profile.cutsite, None);
        assert_eq!(profile.window_len(), profile.spacer_len);
        assert!(profile.targets_rna());
        assert!(!profile.both_strands);
    }
}

#[test]
fn test_cas9_cassette_appends_scaffold() {
    let profile = CasProfile::sp_cas9();
    let cassette = profile.expression_cassette(b"ACGTACGTACGTACGTACGT");

    let expected = format!("ACGTACGTACGTACGTACGT{}", profile.scaffold);
    assert_eq!(cassette, expected.as_bytes());
}

#[test]
fn test_cas12a_cassette_leads_with_scaffold_and_terminates() {
    let profile = CasProfile::lb_cas12a();
    let spacer = b"ACGTACGTACGTACGTACGTACG";
    let cassette = profile.expression_cassette(spacer);

    let expected = format!(
        "{}{}TTTTTT",
        profile.scaffold,
        String::from_utf8_lossy(spacer)
    );
    assert_eq!(cassette, expected.as_bytes());
}

#[test]
fn test_cas13_cassette_reverse_complements_the_target() {
    let profile = CasProfile::lsh_cas13a();
    let cassette = profile.expression_cassette(b"AAAACCCCGGGGTTTTAAAACCCC");

    let expected = format!("{}GGGGTTTTAAAACCCCGGGGTTTT", profile.scaffold);
    assert_eq!(cassette, expected.as_bytes());
}
