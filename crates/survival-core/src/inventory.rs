//! Inventory
//!
//! A bounded list of item slots. Stackable items fill one partial stack
//! before opening new slots; non-stackable items take one slot each.

use bevy_ecs::prelude::*;
use serde::{Deserialize, Serialize};

use crate::vitals::Vitals;

/// Broad category of an item; at most one item per type is equipped
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemType {
    Weapon,
    Armor,
    Consumable,
    Ammunition,
    Material,
    Tool,
    Key,
    Quest,
    #[default]
    Misc,
}

/// Amounts a consumable gives back
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Restores {
    pub health: f32,
    pub stamina: f32,
    pub hunger: f32,
    pub thirst: f32,
}

/// Static description of an item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ItemDef {
    pub id: String,
    pub name: String,
    pub stackable: bool,
    pub max_stack: u32,
    pub equippable: bool,
    pub item_type: ItemType,
    /// Present for items that can be consumed
    pub restores: Option<Restores>,
}

impl Default for ItemDef {
    fn default() -> Self {
        Self {
            id: String::new(),
            name: String::new(),
            stackable: true,
            max_stack: 99,
            equippable: false,
            item_type: ItemType::Misc,
            restores: None,
        }
    }
}

impl ItemDef {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            ..Default::default()
        }
    }

    /// Units one slot can hold
    pub fn stack_limit(&self) -> u32 {
        if self.stackable {
            self.max_stack.max(1)
        } else {
            1
        }
    }
}

/// One occupied inventory slot
#[derive(Debug, Clone, PartialEq)]
pub struct Slot {
    pub item: ItemDef,
    pub quantity: u32,
    pub equipped: bool,
}

/// Component: The player's carried items
#[derive(Component, Debug, Clone)]
pub struct Inventory {
    slots: Vec<Slot>,
    max_slots: usize,
}

impl Inventory {
    pub fn new(max_slots: usize) -> Self {
        Self {
            slots: Vec::new(),
            max_slots,
        }
    }

    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    pub fn max_slots(&self) -> usize {
        self.max_slots
    }

    pub fn used_slots(&self) -> usize {
        self.slots.len()
    }

    /// Adds `quantity` units and returns whether all of them fit.
    ///
    /// Whatever fits stays added even when the result is `false`.
    pub fn add(&mut self, item: &ItemDef, quantity: u32) -> bool {
        let limit = item.stack_limit();
        let mut remaining = quantity;

        if item.stackable {
            if let Some(slot) = self
                .slots
                .iter_mut()
                .find(|s| s.item.id == item.id && s.quantity < limit)
            {
                let added = remaining.min(limit - slot.quantity);
                slot.quantity += added;
                remaining -= added;
            }
        }

        while remaining > 0 && self.slots.len() < self.max_slots {
            let added = remaining.min(limit);
            self.slots.push(Slot {
                item: item.clone(),
                quantity: added,
                equipped: false,
            });
            remaining -= added;
        }

        if remaining > 0 {
            tracing::debug!(item = %item.id, remaining, "inventory full");
        }
        remaining == 0
    }

    /// Removes up to `quantity` units, taking from slots in order.
    /// Returns whether the full amount was removed.
    pub fn remove(&mut self, item_id: &str, quantity: u32) -> bool {
        let mut remaining = quantity;
        for slot in self.slots.iter_mut().filter(|s| s.item.id == item_id) {
            if remaining == 0 {
                break;
            }
            let taken = remaining.min(slot.quantity);
            slot.quantity -= taken;
            remaining -= taken;
        }
        self.slots.retain(|s| s.quantity > 0);
        remaining == 0
    }

    /// Total units of `item_id` across all slots
    pub fn count(&self, item_id: &str) -> u32 {
        self.slots
            .iter()
            .filter(|s| s.item.id == item_id)
            .map(|s| s.quantity)
            .sum()
    }

    pub fn has(&self, item_id: &str, quantity: u32) -> bool {
        self.count(item_id) >= quantity
    }

    /// Equips the item in `slot`, unequipping any other item of its type.
    pub fn equip(&mut self, slot: usize) -> bool {
        let Some(item_type) = self
            .slots
            .get(slot)
            .filter(|s| s.item.equippable)
            .map(|s| s.item.item_type)
        else {
            return false;
        };

        for other in self.slots.iter_mut().filter(|s| s.item.item_type == item_type) {
            other.equipped = false;
        }
        self.slots[slot].equipped = true;
        true
    }

    /// Equipped item of the given type, if any
    pub fn equipped(&self, item_type: ItemType) -> Option<&Slot> {
        self.slots
            .iter()
            .find(|s| s.equipped && s.item.item_type == item_type)
    }

    /// Uses one unit from `slot`, applying its restores to `vitals`.
    pub fn consume(&mut self, slot: usize, vitals: &mut Vitals) -> bool {
        let Some(restores) = self.slots.get(slot).and_then(|s| s.item.restores) else {
            return false;
        };

        if restores.health > 0.0 {
            vitals.heal(restores.health);
        }
        if restores.stamina > 0.0 {
            vitals.restore_stamina(restores.stamina);
        }
        if restores.hunger > 0.0 {
            vitals.consume_food(restores.hunger);
        }
        if restores.thirst > 0.0 {
            vitals.consume_water(restores.thirst);
        }

        let entry = &mut self.slots[slot];
        entry.quantity -= 1;
        if entry.quantity == 0 {
            self.slots.remove(slot);
        }
        true
    }
}
