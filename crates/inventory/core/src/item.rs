//! Item descriptors supplied by the catalog.
//!
//! Descriptors are plain data copied into every placed instance. They have no
//! identity beyond field-wise equality: two descriptors with identical fields
//! are interchangeable, which is what stack merging relies on.

/// Broad item class. The set is closed; content files name variants in snake_case.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum ItemCategory {
    /// Jerry cans and other fuel containers
    Fuel,
    /// Edible supplies
    Food,
    /// Water, coffee, soda
    Drink,
    /// Wrenches, jacks, flashlights
    Tool,
    /// Spare car parts
    Part,
    /// Bandages, painkillers
    Medical,
    /// Things worth selling
    Valuable,
    /// Maps, letters, notebook pages
    Document,
    #[default]
    Misc,
}

/// How hard an item is to come by.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Rarity {
    #[default]
    Common,
    Uncommon,
    Rare,
    Legendary,
}

/// Immutable description of an item type.
///
/// # Stacking
///
/// - `stackable == false`: every placement holds exactly one unit
/// - `stackable == true`: one placement holds up to `max_stack` units
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemDescriptor {
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub category: ItemCategory,
    #[cfg_attr(feature = "serde", serde(default))]
    pub rarity: Rarity,
    /// Monetary value of a single unit.
    #[cfg_attr(feature = "serde", serde(default))]
    pub value: u32,
    /// Weight of a single unit.
    pub weight: u32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub stackable: bool,
    #[cfg_attr(feature = "serde", serde(default = "default_max_stack"))]
    pub max_stack: u32,
}

#[cfg(feature = "serde")]
fn default_max_stack() -> u32 {
    1
}

impl ItemDescriptor {
    /// Creates a non-stackable common descriptor with the given weight.
    pub fn new(name: impl Into<String>, weight: u32) -> Self {
        Self {
            name: name.into(),
            category: ItemCategory::default(),
            rarity: Rarity::default(),
            value: 0,
            weight,
            stackable: false,
            max_stack: 1,
        }
    }

    pub fn with_category(mut self, category: ItemCategory) -> Self {
        self.category = category;
        self
    }

    pub fn with_rarity(mut self, rarity: Rarity) -> Self {
        self.rarity = rarity;
        self
    }

    pub fn with_value(mut self, value: u32) -> Self {
        self.value = value;
        self
    }

    /// Marks the descriptor stackable up to `max_stack` units.
    pub fn stackable(mut self, max_stack: u32) -> Self {
        self.stackable = true;
        self.max_stack = max_stack;
        self
    }

    /// Largest stack count a single placement may hold.
    ///
    /// Non-stackable descriptors always report 1.
    pub fn stack_limit(&self) -> u32 {
        if self.stackable {
            self.max_stack.max(1)
        } else {
            1
        }
    }

    /// Weight of `count` units. Widened to `u64` so the product is exact.
    pub fn weight_of(&self, count: u32) -> u64 {
        u64::from(self.weight) * u64::from(count)
    }
}

#[cfg(test)]
mod tests {
    use core::str::FromStr;

    use super::*;

    #[test]
    fn category_parses_snake_case() {
        assert_eq!(ItemCategory::from_str("fuel").unwrap(), ItemCategory::Fuel);
        assert_eq!(
            ItemCategory::from_str("Medical").unwrap(),
            ItemCategory::Medical
        );
        assert_eq!(Rarity::Legendary.to_string(), "legendary");
    }

    #[test]
    fn non_stackable_limit_is_one() {
        let map = ItemDescriptor::new("road map", 1);
        assert_eq!(map.stack_limit(), 1);

        let mut odd = ItemDescriptor::new("odd", 1);
        odd.max_stack = 40;
        assert_eq!(odd.stack_limit(), 1);
    }

    #[test]
    fn stackable_limit_uses_max_stack() {
        let bolts = ItemDescriptor::new("bolt", 1).stackable(20);
        assert_eq!(bolts.stack_limit(), 20);
        assert_eq!(bolts.weight_of(3), 3);
    }

    #[test]
    fn weight_of_does_not_wrap() {
        let anvil = ItemDescriptor::new("anvil", u32::MAX).stackable(u32::MAX);
        assert_eq!(anvil.weight_of(2), 2 * u64::from(u32::MAX));
        assert_eq!(anvil.weight_of(u32::MAX), u64::from(u32::MAX) * u64::from(u32::MAX));
    }

    #[test]
    fn descriptors_compare_by_fields() {
        let a = ItemDescriptor::new("canned beans", 2).with_category(ItemCategory::Food);
        let b = ItemDescriptor::new("canned beans", 2).with_category(ItemCategory::Food);
        let c = b.clone().with_value(3);
        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
