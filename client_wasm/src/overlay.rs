//! Debug text drawn as DOM elements positioned over the canvas

use crate::batch::TextItem;
use crate::error::ClientError;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlCanvasElement, HtmlElement};

const TEXT_STYLE: &str =
    "position:absolute;color:#fff;font:12px monospace;white-space:pre;pointer-events:none;";

/// One absolutely positioned element per text line, reused every frame
pub struct TextOverlay {
    document: Document,
    container: web_sys::Element,
    lines: Vec<HtmlElement>,
}

impl TextOverlay {
    /// Attach to the canvas's parent, which must be positioned
    pub fn new(document: Document, canvas: &HtmlCanvasElement) -> Result<Self, ClientError> {
        let container = canvas
            .parent_element()
            .ok_or_else(|| ClientError::Dom("canvas has no parent element".into()))?;
        Ok(Self {
            document,
            container,
            lines: Vec::new(),
        })
    }

    pub fn update(&mut self, texts: &[TextItem]) -> Result<(), ClientError> {
        while self.lines.len() < texts.len() {
            let line = self.create_line()?;
            self.lines.push(line);
        }

        for (i, line) in self.lines.iter().enumerate() {
            match texts.get(i) {
                Some(item) => {
                    line.set_text_content(Some(&item.text));
                    let style = line.style();
                    set_style(&style, "left", &format!("{}px", item.pos.x))?;
                    set_style(&style, "top", &format!("{}px", item.pos.y))?;
                    set_style(&style, "display", "block")?;
                }
                None => set_style(&line.style(), "display", "none")?,
            }
        }
        Ok(())
    }

    fn create_line(&self) -> Result<HtmlElement, ClientError> {
        let line = self
            .document
            .create_element("div")
            .map_err(|e| ClientError::Dom(format!("{:?}", e)))?
            .dyn_into::<HtmlElement>()
            .map_err(|_| ClientError::Dom("div is not an HtmlElement".into()))?;
        line.set_attribute("style", TEXT_STYLE)
            .map_err(|e| ClientError::Dom(format!("{:?}", e)))?;
        self.container
            .append_child(&line)
            .map_err(|e| ClientError::Dom(format!("{:?}", e)))?;
        Ok(line)
    }
}

fn set_style(
    style: &web_sys::CssStyleDeclaration,
    property: &str,
    value: &str,
) -> Result<(), ClientError> {
    style
        .set_property(property, value)
        .map_err(|e| ClientError::Dom(format!("{:?}", e)))
}
