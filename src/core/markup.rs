use crate::domain::model::RawFragment;
use crate::utils::error::{MenuError, Result};
use scraper::{Html, Selector};

fn selector(css: &str) -> Result<Selector> {
    Selector::parse(css).map_err(|e| MenuError::ParseAnomaly {
        message: format!("bad selector '{}': {:?}", css, e),
    })
}

/// Every `div` inside the page's first `table`, in document order.
///
/// Nested divs are reported as well, each with its own outer markup, which
/// matches how FoodPro pages wrap a colored `font` tag in a name `div`.
pub fn extract_fragments(html: &str) -> Result<Vec<RawFragment>> {
    let document = Html::parse_document(html);
    let table_selector = selector("table")?;
    let div_selector = selector("div")?;

    let table = document
        .select(&table_selector)
        .next()
        .ok_or_else(|| MenuError::ParseAnomaly {
            message: "page has no menu table".to_string(),
        })?;

    let fragments = table
        .select(&div_selector)
        .map(|div| {
            let text = div.text().collect::<String>();
            RawFragment::new(text.trim(), div.html())
        })
        .collect();

    Ok(fragments)
}
