//! Cross-revision conformance suite
//!
//! The correctness property of the whole layer: structurally distinct
//! version-pinned adapters must be output-equivalent for equivalent native
//! inputs. Each case builds the same logical profile in every revision's
//! pinned native layout and compares the normalized results.

use marionette::{
    iter_adapters, HostAdapter, ProfileAdapter, ProfileComposer, SkinProfile, SkinTexture,
};
use pretty_assertions::assert_eq;
use rig_foundation::TEXTURES_PROPERTY;
use uuid::Uuid;

use rig_host_v1_20_r4 as v1_20;
use rig_host_v1_21_r1 as v1_21r1;
use rig_host_v1_21_r3 as v1_21r3;

/// Adapt the same logical profile through every compiled-in revision.
fn adapt_everywhere(
    id: Uuid,
    name: &str,
    texture_values: &[&str],
) -> Vec<(&'static str, SkinProfile)> {
    let mut native = v1_20::host::GameProfile::new(id, name);
    for value in texture_values {
        native = native.with_property(TEXTURES_PROPERTY, *value, None);
    }
    let v1_20_result = v1_20::HostAdapterV1_20R4.adapt(&native);

    let mut native = v1_21r1::host::GameProfile::new(id, name);
    for value in texture_values {
        native = native.put_property(TEXTURES_PROPERTY, *value, None);
    }
    let v1_21r1_result = v1_21r1::HostAdapterV1_21R1.adapt(&native);

    let mut native =
        v1_21r3::host::GameProfile::new(v1_21r3::host::ProfileId::from_uuid(id), name);
    for value in texture_values {
        native = native.with_record(TEXTURES_PROPERTY, *value, None);
    }
    let v1_21r3_result = v1_21r3::HostAdapterV1_21R3.adapt(&native);

    vec![
        ("v1_20_R4", v1_20_result),
        ("v1_21_R1", v1_21r1_result),
        ("v1_21_R3", v1_21r3_result),
    ]
}

fn assert_all_equal<'a>(results: &'a [(&'static str, SkinProfile)]) -> &'a SkinProfile {
    let (baseline_version, baseline) = &results[0];
    for (version, profile) in &results[1..] {
        assert_eq!(
            profile, baseline,
            "{version} disagrees with {baseline_version}"
        );
    }
    baseline
}

#[test]
fn textured_profile_is_equivalent_across_revisions() {
    let id = Uuid::parse_str("123e4567-e89b-12d3-a456-426614174000").unwrap();
    let results = adapt_everywhere(id, "Steve", &["abc123base64"]);
    let profile = assert_all_equal(&results);

    assert_eq!(profile.id, id);
    assert_eq!(profile.name, "Steve");
    assert_eq!(profile.texture, Some(SkinTexture::new("abc123base64")));
}

#[test]
fn profile_without_textures_is_equivalent_and_never_errors() {
    let id = Uuid::parse_str("123e4567-e89b-12d3-a456-426614174000").unwrap();
    let results = adapt_everywhere(id, "Steve", &[]);
    let profile = assert_all_equal(&results);

    assert_eq!(profile.name, "Steve");
    assert!(profile.texture.is_none());
}

#[test]
fn first_of_multiple_texture_values_wins_everywhere() {
    let results = adapt_everywhere(Uuid::new_v4(), "Steve", &["first", "second"]);
    let profile = assert_all_equal(&results);
    assert_eq!(profile.texture, Some(SkinTexture::new("first")));
}

#[test]
fn non_ascii_display_names_pass_through_untouched() {
    let results = adapt_everywhere(Uuid::new_v4(), "Ænderson_スティーブ", &["blob"]);
    assert_eq!(assert_all_equal(&results).name, "Ænderson_スティーブ");
}

#[test]
fn skinless_v1_20_quirk_matches_missing_property_elsewhere() {
    // v1_20_R4 represents "no skin" as an empty textures property; later
    // revisions omit the property. Both native shapes describe the same
    // logical profile and must normalize identically.
    let id = Uuid::new_v4();
    let quirky = v1_20::host::GameProfile::new(id, "Steve").with_property(
        TEXTURES_PROPERTY,
        "",
        None,
    );
    let plain = v1_21r3::host::GameProfile::new(
        v1_21r3::host::ProfileId::from_uuid(id),
        "Steve",
    );

    assert_eq!(
        v1_20::HostAdapterV1_20R4.adapt(&quirky),
        v1_21r3::HostAdapterV1_21R3.adapt(&plain)
    );
}

#[test]
fn every_descriptor_agrees_with_its_adapter_metadata() {
    let mut seen = 0;
    for descriptor in iter_adapters() {
        let adapter = (descriptor.factory)();
        assert_eq!(adapter.metadata().version, descriptor.version);
        assert_eq!(adapter.metadata().release, descriptor.release);
        seen += 1;
    }
    assert_eq!(seen, 3);
}

#[test]
fn composer_capability_follows_revision_support() {
    assert!(v1_20::HostAdapterV1_20R4.profile_composer().is_none());
    assert!(v1_21r1::HostAdapterV1_21R1.profile_composer().is_some());
    assert!(v1_21r3::HostAdapterV1_21R3.profile_composer().is_some());
}

#[test]
fn composers_are_equivalent_for_the_same_skin() {
    let skin = SkinProfile::new(Uuid::new_v4(), "Steve", Some(SkinTexture::new("blob")));
    let r1 = v1_21r1::HostAdapterV1_21R1
        .profile_composer()
        .unwrap()
        .compose(&skin);
    let r3 = v1_21r3::HostAdapterV1_21R3
        .profile_composer()
        .unwrap()
        .compose(&skin);
    assert_eq!(r1, r3);
}
