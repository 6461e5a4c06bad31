#![allow(dead_code)]

use phpscribe::types::{
    AnnotationValue, ElementInfo, ElementKind, LONG_DESCRIPTION, SHORT_DESCRIPTION,
};

pub fn class(name: &str) -> ElementInfo {
    ElementInfo::new(name, ElementKind::Class)
}

pub fn function(name: &str) -> ElementInfo {
    ElementInfo::new(name, ElementKind::Function)
}

pub fn constant(name: &str) -> ElementInfo {
    ElementInfo::new(name, ElementKind::Constant)
}

/// An in-class element named `Owner::member` with its declaring class set.
pub fn member(kind: ElementKind, class: &str, name: &str) -> ElementInfo {
    let mut info = ElementInfo::new(format!("{}::{}", class, name), kind);
    info.declaring_class = Some(class.to_string());
    info
}

pub fn method(class: &str, name: &str) -> ElementInfo {
    member(ElementKind::Method, class, name)
}

pub fn property(class: &str, name: &str) -> ElementInfo {
    member(ElementKind::Property, class, name)
}

pub fn tag(name: &str, values: &[&str]) -> (String, Vec<AnnotationValue>) {
    (
        name.to_string(),
        values.iter().map(|v| AnnotationValue::from(*v)).collect(),
    )
}

pub fn short_desc(text: &str) -> (String, Vec<AnnotationValue>) {
    (SHORT_DESCRIPTION.to_string(), vec![text.into()])
}

pub fn long_desc(text: &str) -> (String, Vec<AnnotationValue>) {
    (LONG_DESCRIPTION.to_string(), vec![text.into()])
}
