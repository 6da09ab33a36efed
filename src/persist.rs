//! Reading and writing trained models.
//!
//! A model is stored as a JSON document
//! `{ "format_version": 1, "model": { ... } }`.
//! Floating-point values round-trip exactly.
use serde::{Serialize, Deserialize};

use crate::{
    BoostError,
    DecisionTreeClassifier,
    Ensemble,
    Result,
    constants::FORMAT_VERSION,
};

use std::io::{Read, Write};


#[derive(Serialize)]
struct Document<'a> {
    format_version: u32,
    model: &'a Ensemble<DecisionTreeClassifier>,
}


#[derive(Deserialize)]
struct OwnedDocument {
    model: Ensemble<DecisionTreeClassifier>,
}


#[derive(Deserialize)]
struct VersionHeader {
    format_version: u32,
}


/// Encode `ensemble` into bytes.
pub fn to_bytes(ensemble: &Ensemble<DecisionTreeClassifier>)
    -> Result<Vec<u8>>
{
    let document = Document { format_version: FORMAT_VERSION, model: ensemble };
    serde_json::to_vec(&document)
        .map_err(|e| BoostError::Encode(e.to_string()))
}


/// Decode an ensemble from bytes produced by [`to_bytes`].
/// Malformed documents, unknown format versions,
/// and structurally inconsistent models
/// are reported as [`BoostError::CorruptModel`].
pub fn from_bytes(bytes: &[u8]) -> Result<Ensemble<DecisionTreeClassifier>> {
    let header: VersionHeader = serde_json::from_slice(bytes)
        .map_err(|e| BoostError::CorruptModel(e.to_string()))?;
    if header.format_version != FORMAT_VERSION {
        return Err(BoostError::CorruptModel(format!(
            "unsupported format version {}", header.format_version
        )));
    }

    let document: OwnedDocument = serde_json::from_slice(bytes)
        .map_err(|e| BoostError::CorruptModel(e.to_string()))?;
    document.model.validate()?;
    Ok(document.model)
}


/// Write `ensemble` to `writer`.
pub fn write_to<W: Write>(
    ensemble: &Ensemble<DecisionTreeClassifier>,
    mut writer: W,
) -> Result<()>
{
    let bytes = to_bytes(ensemble)?;
    writer.write_all(&bytes[..])?;
    writer.flush()?;
    Ok(())
}


/// Read an ensemble from `reader` until the end of the stream.
pub fn read_from<R: Read>(mut reader: R)
    -> Result<Ensemble<DecisionTreeClassifier>>
{
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;
    from_bytes(&bytes[..])
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        Booster,
        BoostEngine,
        BoostParams,
        BoostType,
        DecisionTreeBuilder,
        Sample,
        TrainingSet,
    };

    fn trained() -> Ensemble<DecisionTreeClassifier> {
        let samples = (0..10)
            .map(|i| {
                let y = if i % 3 == 0 { 2.0 } else { 7.0 };
                Sample::new(vec![i as f64 * 0.1, (i * i) as f64], y)
            })
            .collect::<Vec<_>>();
        let set = TrainingSet::from_samples(&samples).unwrap();
        let config = BoostParams::new()
            .boost_type(BoostType::Real)
            .weak_count(10)
            .max_depth(2)
            .check()
            .unwrap();
        let tree = DecisionTreeBuilder::from_config(&config).build();
        BoostEngine::init(&set, &config).run(&tree).unwrap()
    }

    #[test]
    fn round_trip_is_exact() {
        let f = trained();
        let bytes = to_bytes(&f).unwrap();
        let g = from_bytes(&bytes).unwrap();
        assert_eq!(f, g);

        let mut buffer = Vec::new();
        write_to(&f, &mut buffer).unwrap();
        assert_eq!(buffer, bytes);
        assert_eq!(read_from(&buffer[..]).unwrap(), f);
    }

    #[test]
    fn rejects_garbage_and_unknown_versions() {
        let err = from_bytes(b"not a model").unwrap_err();
        assert!(matches!(err, BoostError::CorruptModel(_)));

        let err = from_bytes(b"").unwrap_err();
        assert!(matches!(err, BoostError::CorruptModel(_)));

        let bytes = to_bytes(&trained()).unwrap();
        let text = String::from_utf8(bytes).unwrap()
            .replacen("\"format_version\":1", "\"format_version\":2", 1);
        let err = from_bytes(text.as_bytes()).unwrap_err();
        assert!(matches!(err, BoostError::CorruptModel(_)));
    }

    #[test]
    fn rejects_inconsistent_models() {
        let bytes = to_bytes(&trained()).unwrap();
        let mut value: serde_json::Value = serde_json::from_slice(&bytes)
            .unwrap();

        // Drop every coefficient.
        let mut broken = value.clone();
        broken["model"]["coefficients"] = serde_json::json!([]);
        let bytes = serde_json::to_vec(&broken).unwrap();
        assert!(matches!(
            from_bytes(&bytes).unwrap_err(),
            BoostError::CorruptModel(_)
        ));

        // A split on a feature the model does not have.
        value["model"]["n_features"] = serde_json::json!(0);
        let bytes = serde_json::to_vec(&value).unwrap();
        assert!(matches!(
            from_bytes(&bytes).unwrap_err(),
            BoostError::CorruptModel(_)
        ));
    }
}
