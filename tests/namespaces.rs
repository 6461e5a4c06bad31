//! Namespace canonicalization across elements and the pseudo-namespace
//! sentinels.

mod common;

use common::*;
use phpscribe::{ElementInfo, ElementKind, Project};

#[test]
fn casing_variants_share_one_canonical_name() {
    let project = Project::new();

    let mut first = class("App\\Util\\A");
    first.namespace = Some("App\\Util".to_string());
    let mut second = class("app\\util\\B");
    second.namespace = Some("app\\util".to_string());

    let first = project.add(first);
    let second = project.add(second);

    assert_eq!(first.namespace_name(&project), "App\\Util");
    assert_eq!(second.namespace_name(&project), "App\\Util");
}

#[test]
fn first_seen_casing_is_canonical() {
    let project = Project::new();

    let mut lower = class("app\\util\\A");
    lower.namespace = Some("app\\util".to_string());
    let mut upper = class("App\\Util\\B");
    upper.namespace = Some("App\\Util".to_string());

    let lower = project.add(lower);
    let upper = project.add(upper);

    // Registration order decides, not "niceness" of the casing.
    assert_eq!(lower.namespace_name(&project), "app\\util");
    assert_eq!(upper.namespace_name(&project), "app\\util");
}

#[test]
fn missing_namespace_is_empty() {
    let project = Project::new();
    let element = project.add(class("GlobalThing"));
    assert_eq!(element.namespace_name(&project), "");
}

#[test]
fn pseudo_namespace_for_internal_definitions() {
    let project = Project::new();
    let mut info = ElementInfo::internal("strlen", ElementKind::Function);
    // Even a namespace on the raw data doesn't change the sentinel.
    info.namespace = Some("Whatever".to_string());
    let element = project.add(info);
    assert_eq!(element.pseudo_namespace_name(&project), "PHP");
}

#[test]
fn pseudo_namespace_for_global_elements() {
    let project = Project::new();
    let element = project.add(class("GlobalThing"));
    assert_eq!(element.pseudo_namespace_name(&project), "None");
}

#[test]
fn pseudo_namespace_for_namespaced_elements() {
    let project = Project::new();
    let mut info = class("App\\User");
    info.namespace = Some("App".to_string());
    let element = project.add(info);
    assert_eq!(element.pseudo_namespace_name(&project), "App");
}

#[test]
fn namespace_aliases_pass_through() {
    let project = Project::new();
    let mut info = class("App\\User");
    info.namespace_aliases
        .insert("Collection".to_string(), "Support\\Collection".to_string());
    let element = project.add(info);

    assert_eq!(
        element.namespace_aliases().get("Collection").map(String::as_str),
        Some("Support\\Collection")
    );
}
