//! POM reader: project coordinates, parent inheritance, property interpolation.

use std::collections::BTreeMap;

use quick_xml::events::Event;
use quick_xml::Reader;

use super::{ManifestFormat, ManifestReader};
use crate::coordinate::PartialCoordinate;

/// Bound on nested or self-referencing property expansion.
const MAX_SUBSTITUTIONS: usize = 20;

/// The parts of a POM that identify the project.
#[derive(Debug, Clone, Default)]
pub struct Pom {
    pub group_id: Option<String>,
    pub artifact_id: Option<String>,
    pub version: Option<String>,
    pub packaging: Option<String>,
    pub parent: Option<ParentRef>,
    pub properties: BTreeMap<String, String>,
}

/// Reference to a parent POM.
#[derive(Debug, Clone, Default)]
pub struct ParentRef {
    pub group_id: String,
    pub artifact_id: String,
    pub version: String,
}

impl Pom {
    /// Effective group ID (falls back to parent).
    pub fn effective_group_id(&self) -> Option<&str> {
        self.group_id
            .as_deref()
            .or(self.parent.as_ref().map(|p| p.group_id.as_str()))
            .filter(|s| !s.is_empty())
    }

    /// Effective version (falls back to parent).
    pub fn effective_version(&self) -> Option<&str> {
        self.version
            .as_deref()
            .or(self.parent.as_ref().map(|p| p.version.as_str()))
            .filter(|s| !s.is_empty())
    }

    /// Resolve `${property}` references using POM properties and the
    /// built-in `project.*` variables. Unknown references are left as-is.
    pub fn interpolate(&self, input: &str) -> String {
        let mut result = input.to_string();
        let mut cursor = 0;
        let mut substitutions = 0;
        while substitutions < MAX_SUBSTITUTIONS {
            let Some(offset) = result[cursor..].find("${") else {
                break;
            };
            let start = cursor + offset;
            let Some(len) = result[start..].find('}') else {
                break;
            };
            let key = &result[start + 2..start + len];
            match self.resolve_property(key) {
                Some(value) => {
                    result = format!("{}{}{}", &result[..start], value, &result[start + len + 1..]);
                    cursor = start;
                    substitutions += 1;
                }
                None => cursor = start + len + 1,
            }
        }
        result
    }

    fn resolve_property(&self, key: &str) -> Option<String> {
        match key {
            "project.groupId" | "pom.groupId" => self.effective_group_id().map(str::to_string),
            "project.artifactId" | "pom.artifactId" => self.artifact_id.clone(),
            "project.version" | "pom.version" => self.effective_version().map(str::to_string),
            "project.parent.groupId" => self.parent.as_ref().map(|p| p.group_id.clone()),
            "project.parent.version" => self.parent.as_ref().map(|p| p.version.clone()),
            _ => self.properties.get(key).cloned(),
        }
    }

    /// Interpolated coordinate parts, with parent fallback applied.
    pub fn coordinate(&self) -> PartialCoordinate {
        PartialCoordinate {
            group_id: self.effective_group_id().map(|s| self.interpolate(s)),
            artifact_id: self.artifact_id.as_deref().map(|s| self.interpolate(s)),
            version: self.effective_version().map(|s| self.interpolate(s)),
        }
    }
}

/// Parse a POM XML string.
///
/// The document must have a single `<project>` root element; anything else
/// (including JSON or plain text) is reported as a parse failure.
pub fn parse_pom(xml: &str) -> Result<Pom, String> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut pom = Pom::default();
    let mut path: Vec<String> = Vec::new();
    let mut text_buf = String::new();
    let mut current_parent: Option<ParentRef> = None;
    let mut seen_root = false;

    loop {
        match reader.read_event() {
            Ok(Event::Start(ref e)) => {
                let tag = String::from_utf8_lossy(e.local_name().as_ref()).to_string();
                if path.is_empty() {
                    if seen_root {
                        return Err("multiple root elements".to_string());
                    }
                    if tag != "project" {
                        return Err(format!("expected <project> root element, found <{tag}>"));
                    }
                    seen_root = true;
                }
                path.push(tag);
                text_buf.clear();

                if path_context(&path) == "project>parent" {
                    current_parent = Some(ParentRef::default());
                }
            }
            Ok(Event::Empty(ref e)) => {
                let tag = String::from_utf8_lossy(e.local_name().as_ref()).to_string();
                if path.is_empty() {
                    return Err(format!("expected <project> root element, found <{tag}/>"));
                }
                // <properties><sha1/></properties> defines an empty property
                if path.len() == 2 && path[1] == "properties" {
                    pom.properties.insert(tag, String::new());
                }
            }
            Ok(Event::Text(ref e)) => {
                if path.is_empty() {
                    return Err("text content outside the root element".to_string());
                }
                text_buf = e.unescape().map_err(|e| e.to_string())?.to_string();
            }
            Ok(Event::End(_)) => {
                let ctx = path_context(&path);
                let depth = path.len();

                // <project><properties><key>value</key></properties>
                if depth == 3 && path.get(1).map(|s| s.as_str()) == Some("properties") {
                    let prop_name = path.last().cloned().unwrap_or_default();
                    pom.properties.insert(prop_name, text_buf.clone());
                }

                if let Some(ref mut parent) = current_parent {
                    match ctx.as_str() {
                        "project>parent>groupId" => parent.group_id = text_buf.clone(),
                        "project>parent>artifactId" => parent.artifact_id = text_buf.clone(),
                        "project>parent>version" => parent.version = text_buf.clone(),
                        "project>parent" => pom.parent = current_parent.take(),
                        _ => {}
                    }
                }

                if depth == 2 {
                    match path.last().map(|s| s.as_str()) {
                        Some("groupId") => pom.group_id = Some(text_buf.clone()),
                        Some("artifactId") => pom.artifact_id = Some(text_buf.clone()),
                        Some("version") => pom.version = Some(text_buf.clone()),
                        Some("packaging") => pom.packaging = Some(text_buf.clone()),
                        _ => {}
                    }
                }

                path.pop();
                text_buf.clear();
            }
            Ok(Event::Eof) => break,
            Err(e) => return Err(format!("invalid XML: {e}")),
            _ => {}
        }
    }

    if !path.is_empty() {
        return Err(format!("unexpected end of document inside <{}>", path.join(">")));
    }
    if !seen_root {
        return Err("document has no <project> element".to_string());
    }
    Ok(pom)
}

/// Build a context string from the current XML path for matching.
fn path_context(path: &[String]) -> String {
    path.join(">")
}

/// [`ManifestReader`] for `pom.xml` files.
pub struct PomReader;

impl ManifestReader for PomReader {
    const FORMAT: ManifestFormat = ManifestFormat::Pom;

    fn parse(content: &str) -> Result<PartialCoordinate, String> {
        parse_pom(content).map(|pom| pom.coordinate())
    }
}
