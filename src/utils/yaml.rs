use std::fmt;

use serde::de::{
    self, Deserialize, Deserializer, EnumAccess, MapAccess, SeqAccess, VariantAccess, Visitor,
};
use serde_yaml::{Mapping, Value};

/// Replace every tagged node with the plain value underneath it.
///
/// Source profiles sometimes carry application-specific tags (`!secret`,
/// `!env`, ...). They are treated as identity coercions: a tagged sequence
/// or mapping becomes the container, a tagged scalar becomes its text. The
/// result never contains `Value::Tagged`, so nothing tagged is emitted again
/// on output.
pub fn relax_tags(value: Value) -> Value {
    match value {
        Value::Tagged(tagged) => untag(tagged.value),
        Value::Sequence(seq) => Value::Sequence(seq.into_iter().map(relax_tags).collect()),
        Value::Mapping(map) => Value::Mapping(
            map.into_iter()
                .map(|(k, v)| (relax_tags(k), relax_tags(v)))
                .collect(),
        ),
        other => other,
    }
}

/// Plain value of a node that carried a tag
fn untag(inner: Value) -> Value {
    match inner {
        Value::Null => Value::String(String::new()),
        Value::Bool(b) => Value::String(b.to_string()),
        Value::Number(n) => Value::String(n.to_string()),
        other => relax_tags(other),
    }
}

/// A YAML value decoded leniently: a repeated mapping key keeps its last
/// value and tags are relaxed while decoding.
struct RelaxedValue(Value);

impl<'de> Deserialize<'de> for RelaxedValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(RelaxedVisitor)
    }
}

struct RelaxedVisitor;

impl<'de> Visitor<'de> for RelaxedVisitor {
    type Value = RelaxedValue;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("any YAML value")
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<RelaxedValue, E> {
        Ok(RelaxedValue(Value::Bool(v)))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<RelaxedValue, E> {
        Ok(RelaxedValue(Value::Number(v.into())))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<RelaxedValue, E> {
        Ok(RelaxedValue(Value::Number(v.into())))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<RelaxedValue, E> {
        Ok(RelaxedValue(Value::Number(v.into())))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<RelaxedValue, E> {
        Ok(RelaxedValue(Value::String(v.to_string())))
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<RelaxedValue, E> {
        Ok(RelaxedValue(Value::String(v)))
    }

    fn visit_unit<E: de::Error>(self) -> Result<RelaxedValue, E> {
        Ok(RelaxedValue(Value::Null))
    }

    fn visit_none<E: de::Error>(self) -> Result<RelaxedValue, E> {
        Ok(RelaxedValue(Value::Null))
    }

    fn visit_some<D>(self, deserializer: D) -> Result<RelaxedValue, D::Error>
    where
        D: Deserializer<'de>,
    {
        RelaxedValue::deserialize(deserializer)
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<RelaxedValue, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let mut items = Vec::with_capacity(seq.size_hint().unwrap_or(0));
        while let Some(RelaxedValue(item)) = seq.next_element::<RelaxedValue>()? {
            items.push(item);
        }
        Ok(RelaxedValue(Value::Sequence(items)))
    }

    fn visit_map<A>(self, mut map: A) -> Result<RelaxedValue, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut mapping = Mapping::new();
        while let Some((RelaxedValue(key), RelaxedValue(value))) =
            map.next_entry::<RelaxedValue, RelaxedValue>()?
        {
            // Last occurrence of a repeated key wins
            mapping.insert(key, value);
        }
        Ok(RelaxedValue(Value::Mapping(mapping)))
    }

    fn visit_enum<A>(self, data: A) -> Result<RelaxedValue, A::Error>
    where
        A: EnumAccess<'de>,
    {
        // serde_yaml hands tagged nodes over as single-variant enums
        let (_tag, variant): (String, _) = data.variant()?;
        let RelaxedValue(inner) = variant.newtype_variant::<RelaxedValue>()?;
        Ok(RelaxedValue(untag(inner)))
    }
}

/// Parse YAML text leniently.
///
/// Tags are relaxed, a repeated key keeps its last value and `<<` merge keys
/// are expanded into the mapping that holds them.
pub fn from_str_relaxed(content: &str) -> Result<Value, serde_yaml::Error> {
    let RelaxedValue(mut value) = serde_yaml::from_str::<RelaxedValue>(content)?;
    value.apply_merge()?;
    Ok(value)
}

/// Human readable name of a YAML value's kind, for diagnostics
pub fn kind_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Sequence(_) => "sequence",
        Value::Mapping(_) => "mapping",
        Value::Tagged(_) => "tagged value",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relax_scalar_tag() {
        let value = from_str_relaxed("password: !secret hunter2").unwrap();
        assert_eq!(
            value.get("password"),
            Some(&Value::String("hunter2".to_string()))
        );
    }

    #[test]
    fn test_tagged_scalars_become_text() {
        let yaml = "id: !custom 123\nflag: !custom true\nempty: !custom\nplain: 7\n";
        let value = from_str_relaxed(yaml).unwrap();
        assert_eq!(value.get("id").and_then(Value::as_str), Some("123"));
        assert_eq!(value.get("flag").and_then(Value::as_str), Some("true"));
        assert_eq!(value.get("empty").and_then(Value::as_str), Some(""));
        assert_eq!(value.get("plain").and_then(Value::as_u64), Some(7));
    }

    #[test]
    fn test_relax_tags_on_parsed_value() {
        let tagged: Value = serde_yaml::from_str("port: !num 443\nopts: !o {a: 1}\n").unwrap();
        let relaxed = relax_tags(tagged);
        assert_eq!(relaxed.get("port").and_then(Value::as_str), Some("443"));
        assert_eq!(
            relaxed.get("opts").and_then(|o| o.get("a")).and_then(Value::as_u64),
            Some(1)
        );
    }

    #[test]
    fn test_relax_nested_container_tags() {
        let yaml = r#"
outer: !wrapper
  inner: !list
    - !item a
    - b
"#;
        let value = from_str_relaxed(yaml).unwrap();
        let outer = value.get("outer").unwrap();
        assert!(outer.is_mapping());
        let inner = outer.get("inner").unwrap().as_sequence().unwrap();
        assert_eq!(inner[0], Value::String("a".to_string()));
        assert_eq!(inner[1], Value::String("b".to_string()));

        let dumped = serde_yaml::to_string(&value).unwrap();
        assert!(!dumped.contains('!'));
    }

    #[test]
    fn test_repeated_key_keeps_last_value() {
        let value = from_str_relaxed("name: A\nport: 1\nport: 2\n").unwrap();
        let map = value.as_mapping().unwrap();
        assert_eq!(map.len(), 2);
        assert_eq!(map.get("port").and_then(Value::as_u64), Some(2));
    }

    #[test]
    fn test_merge_keys_are_expanded() {
        let yaml = r#"
base: &base
  type: ss
  port: 8388
node:
  <<: *base
  port: 443
"#;
        let value = from_str_relaxed(yaml).unwrap();
        let node = value.get("node").unwrap().as_mapping().unwrap();
        assert!(node.get("<<").is_none());
        assert_eq!(node.get("type").and_then(Value::as_str), Some("ss"));
        assert_eq!(node.get("port").and_then(Value::as_u64), Some(443));
    }

    #[test]
    fn test_untagged_document_unchanged() {
        let yaml = "a: 1\nb: [x, y]\nc: {d: 1.5, e: null}\n";
        let plain: Value = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(from_str_relaxed(yaml).unwrap(), plain);
    }

    #[test]
    fn test_kind_name() {
        assert_eq!(kind_name(&Value::Null), "null");
        assert_eq!(kind_name(&Value::Sequence(Vec::new())), "sequence");
        assert_eq!(kind_name(&Value::String(String::new())), "string");
    }
}
