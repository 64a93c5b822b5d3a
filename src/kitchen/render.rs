//! Read-only view of the kitchen for front-ends
//!
//! Each cell shows at most one entity: agent over item over station.

use crate::core::types::Position;
use crate::kitchen::agent::Agent;
use crate::kitchen::item::Item;
use crate::kitchen::station::Station;
use crate::kitchen::world::Kitchen;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderCell<'a> {
    Agent(&'a Agent),
    Item(&'a Item),
    Station(&'a Station),
    Empty,
}

impl RenderCell<'_> {
    /// Two-character label used by the text renderer
    pub fn label(&self) -> String {
        match self {
            RenderCell::Agent(agent) => format!("{:<2.2}", agent.name),
            RenderCell::Item(item) => format!("{:<2}", item.kind.tag()),
            RenderCell::Station(station) => format!("{:<2.2}", station.name),
            RenderCell::Empty => ". ".to_string(),
        }
    }
}

impl Kitchen {
    pub fn cell(&self, pos: Position) -> RenderCell<'_> {
        if let Some(agent) = self.agent_at(pos) {
            RenderCell::Agent(agent)
        } else if let Some(item) = self.item_at(pos) {
            RenderCell::Item(item)
        } else if let Some(station) = self.station_at(pos) {
            RenderCell::Station(station)
        } else {
            RenderCell::Empty
        }
    }

    /// Rows of cells, y outer, x inner
    pub fn render_cells(&self) -> Vec<Vec<RenderCell<'_>>> {
        (0..=self.height())
            .map(|y| (0..=self.width()).map(|x| self.cell(Position::new(x, y))).collect())
            .collect()
    }

    pub fn render_text(&self) -> String {
        let mut out = String::new();
        for row in self.render_cells() {
            for cell in row {
                out.push_str(&cell.label());
            }
            out.push('\n');
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use crate::kitchen::item::ItemKind;
    use crate::kitchen::scenario::KitchenBuilder;
    use crate::kitchen::station::StationKind;

    #[test]
    fn test_precedence_agent_item_station() {
        let kitchen = KitchenBuilder::new("render")
            .min_size(2, 0)
            .agent("a1", 0, 0)
            .item(ItemKind::Soup, 0, 0)
            .item(ItemKind::RawOnion, 1, 0)
            .station(StationKind::Chop, 1, 0)
            .station(StationKind::Deliver, 2, 0)
            .build()
            .unwrap();

        assert_eq!(kitchen.render_text(), "a1o D1\n");
    }

    #[test]
    fn test_grid_dimensions_are_inclusive() {
        let kitchen = KitchenBuilder::new("dims").min_size(3, 2).build().unwrap();
        let cells = kitchen.render_cells();
        assert_eq!(cells.len(), 3);
        assert!(cells.iter().all(|row| row.len() == 4));
        assert_eq!(kitchen.render_text().lines().next(), Some(". . . . "));
    }
}
