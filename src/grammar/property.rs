//! Property grammars: `name : value`, `name : anything` and `name : v1, v2, ...`

use serde::Serialize;

use super::error::GrammarError;
use super::outcome::GrammarResult;
use super::patterns::{split_list, PROPERTY_HEAD, PROPERTY_STRICT_HEAD, VALUE_LIST, VALUE_TOKEN};

/// A `name : value` pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Property {
    pub name: String,
    pub val: String,
}

/// A `name : v1, v2, ...` list. Order is kept and duplicates are allowed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PropertyList {
    pub name: String,
    pub vals: Vec<String>,
}

/// `name : value` with a single-token value.
///
/// The name may contain spaces and hyphens (`bus width : 32`). Older macro files use
/// multi-word names, so this stays looser than the other property forms.
pub fn parse_property(source: &str) -> GrammarResult<Property> {
    let Some(head) = PROPERTY_HEAD.captures(source) else {
        return Ok(None);
    };
    let rest = &head["rest"];
    let val = VALUE_TOKEN
        .captures(rest)
        .ok_or_else(|| GrammarError::ExpectedValue {
            got: rest.trim().to_string(),
        })?;

    Ok(Some(Property {
        name: head["name"].to_string(),
        val: val["val"].to_string(),
    }))
}

/// `name : anything`. The value is the trimmed remainder of the line, whatever it holds.
pub fn parse_property_any_value(source: &str) -> GrammarResult<Property> {
    Ok(PROPERTY_STRICT_HEAD.captures(source).map(|head| Property {
        name: head["name"].to_string(),
        val: head["rest"].trim().to_string(),
    }))
}

/// `name : v1, v2, ...` with single-token items.
pub fn parse_property_list(source: &str) -> GrammarResult<PropertyList> {
    let Some(head) = PROPERTY_STRICT_HEAD.captures(source) else {
        return Ok(None);
    };
    let rest = &head["rest"];
    if !VALUE_LIST.is_match(rest) {
        return Err(GrammarError::ExpectedValueList {
            got: rest.trim().to_string(),
        });
    }

    Ok(Some(PropertyList {
        name: head["name"].to_string(),
        vals: split_list(rest),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_property_multi_word_name() {
        let prop = parse_property("bus width : 32").unwrap().unwrap();
        assert_eq!(prop.name, "bus width");
        assert_eq!(prop.val, "32");

        let prop = parse_property("  data-width:8").unwrap().unwrap();
        assert_eq!(prop.name, "data-width");
        assert_eq!(prop.val, "8");
    }

    #[test]
    fn test_property_value_must_be_one_token() {
        assert_eq!(
            parse_property("bus width : 32 bits"),
            Err(GrammarError::ExpectedValue {
                got: "32 bits".into()
            })
        );
        assert!(parse_property("name :").is_err());
    }

    #[test]
    fn test_property_without_colon_is_no_match() {
        assert_eq!(parse_property("bus width 32"), Ok(None));
        assert_eq!(parse_property("<routing>"), Ok(None));
    }

    #[test]
    fn test_any_value_keeps_the_remainder() {
        let prop = parse_property_any_value("init : reset(0, \"x\")  ")
            .unwrap()
            .unwrap();
        assert_eq!(prop.name, "init");
        assert_eq!(prop.val, "reset(0, \"x\")");

        let prop = parse_property_any_value("empty:").unwrap().unwrap();
        assert_eq!(prop.val, "");
    }

    #[test]
    fn test_any_value_name_is_single_token() {
        assert_eq!(parse_property_any_value("bus width : 32"), Ok(None));
        assert_eq!(parse_property_any_value("no colon here"), Ok(None));
    }

    #[test]
    fn test_property_list() {
        let list = parse_property_list("modes: read, write, exec")
            .unwrap()
            .unwrap();
        assert_eq!(list.name, "modes");
        assert_eq!(list.vals, vec!["read", "write", "exec"]);

        let list = parse_property_list("modes: a,a ,b").unwrap().unwrap();
        assert_eq!(list.vals, vec!["a", "a", "b"]);
    }

    #[test]
    fn test_property_list_rejects_bad_values() {
        assert_eq!(
            parse_property_list("modes: read write"),
            Err(GrammarError::ExpectedValueList {
                got: "read write".into()
            })
        );
        assert!(parse_property_list("modes: read,").is_err());
        assert_eq!(parse_property_list("modes read"), Ok(None));
    }
}
