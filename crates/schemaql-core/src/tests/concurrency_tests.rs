use crate::TypeRegistry;
use crate::tests::star_wars;
use rayon::prelude::*;

/// Independent generations share nothing, so they can run side by side and
/// produce the same result.
#[test]
fn parallel_generation() {
    let impls = star_wars::implementations();
    let registries = (0..32)
        .into_par_iter()
        .map(|_| TypeRegistry::build_from_str(star_wars::SCHEMA, &impls))
        .collect::<Result<Vec<_>, _>>()
        .unwrap();

    for registry in &registries {
        assert_eq!(registry.len(), registries[0].len());
        assert_eq!(
            registry.object_type("Droid").unwrap().description(),
            Some("A mechanical creature in the Star Wars universe."),
        );
    }
}

#[test]
fn registry_is_shareable_across_threads() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<TypeRegistry>();

    let registry = TypeRegistry::build_from_str(
        star_wars::SCHEMA,
        &star_wars::implementations(),
    ).unwrap();
    let names = ["Human", "Droid", "Query"]
        .par_iter()
        .map(|name| registry.object_type(name).map(|obj| obj.fields().len()))
        .collect::<Vec<_>>();

    assert_eq!(names, vec![Some(5), Some(5), Some(4)]);
}
