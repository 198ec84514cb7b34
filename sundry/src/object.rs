use sundry_value::{error, Entries, Mapping, Value};

use crate::traverse::{each, fold};

/// A new mapping holding the entries of `object` extended with the
/// entries of each source in turn. Later sources win.
///
/// `object` itself is left unchanged. Every source must be a mapping.
pub fn extend(object: &Mapping, sources: &[Value]) -> error::Result<Mapping> {
    merge(object, sources, true)
}

/// Like [`extend`], but a key that is already present, in `object` or
/// from an earlier source, is never overwritten.
pub fn defaults(object: &Mapping, sources: &[Value]) -> error::Result<Mapping> {
    merge(object, sources, false)
}

fn merge(object: &Mapping, sources: &[Value], overwrite: bool) -> error::Result<Mapping> {
    let entries = fold(
        sources.into(),
        Ok(object.entries().clone()),
        |entries: error::Result<Entries>, source| {
            let mut entries = entries?;
            let source = source.to_mapping()?;
            each(source.as_collection(), |value, key, _| {
                if let Some(name) = key.name() {
                    if overwrite || !entries.contains_key(name) {
                        entries.insert(name.into(), value.clone());
                    }
                }
            });
            Ok(entries)
        },
    )?;
    Ok(entries.into())
}
