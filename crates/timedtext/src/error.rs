use thiserror::Error;

#[derive(Debug, Error)]
pub enum TimedTextError {
    #[error("xml error: {0}")]
    Xml(#[from] quick_xml::Error),
    #[error("xml attribute error: {0}")]
    Attr(#[from] quick_xml::events::attributes::AttrError),
}
