use super::*;
use crate::driver::headless::{MemorySurface, SurfaceRegistry};

#[test]
fn direct_element_is_checked() {
    let ok = RootTarget::Element(MemorySurface::svg(2)).resolve(&SurfaceRegistry::new());
    assert_eq!(ok.unwrap().path_count(), 2);

    let wrong = RootTarget::Element(MemorySurface::with_tag("div", 2)).resolve(&SurfaceRegistry::new());
    assert!(matches!(wrong, Err(WavesError::NotSvgRoot(tag)) if tag == "div"));

    let empty = RootTarget::Element(MemorySurface::svg(0)).resolve(&SurfaceRegistry::new());
    assert!(matches!(empty, Err(WavesError::NoPathElements)));
}

#[test]
fn selector_is_looked_up() {
    let mut reg = SurfaceRegistry::new();
    reg.insert("#waves", MemorySurface::svg(1));

    let found = RootTarget::Selector("#waves".to_owned()).resolve(&reg);
    assert!(found.is_ok());

    let missing = RootTarget::<MemorySurface>::Selector("#nope".to_owned()).resolve(&reg);
    assert!(matches!(missing, Err(WavesError::RootNotFound(s)) if s == "#nope"));
}

#[test]
fn closures_work_as_lookups() {
    let lookup = |s: &str| (s == "svg").then(|| MemorySurface::svg(1));
    assert!(RootTarget::<MemorySurface>::Selector("svg".to_owned()).resolve(&lookup).is_ok());
    assert!(RootTarget::<MemorySurface>::Selector("x".to_owned()).resolve(&lookup).is_err());
}

#[test]
fn tag_check_is_case_insensitive() {
    assert!(check_root(&MemorySurface::with_tag("SVG", 1)).is_ok());
}
