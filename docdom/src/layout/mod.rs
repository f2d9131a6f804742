mod block;

pub use block::Block;

use std::collections::HashMap;

use crate::element::{Content, Element};
use crate::types::Direction;

pub type LayoutResult = HashMap<String, Block>;

/// Lay out the tree as a vertical flow, one line per text line.
///
/// Hidden elements (and everything under them) take no space and get no
/// entry. Row containers are as tall as their tallest child; column
/// containers stack their children.
pub fn layout(root: &Element) -> LayoutResult {
    let mut result = LayoutResult::new();
    layout_element(root, 0, &mut result);
    result
}

fn layout_element(element: &Element, top: u32, result: &mut LayoutResult) -> u32 {
    if element.hidden {
        return 0;
    }

    let height = match &element.content {
        Content::None => 0,
        Content::Text(s) => s.lines().count().max(1) as u32,
        Content::Children(children) => match element.direction {
            Direction::Column => {
                let mut y = top;
                for child in children {
                    y += layout_element(child, y, result);
                }
                y - top
            }
            Direction::Row => children
                .iter()
                .map(|child| layout_element(child, top, result))
                .max()
                .unwrap_or(0),
        },
    };

    result.insert(element.id.clone(), Block::new(top, height));
    height
}
