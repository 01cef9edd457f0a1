//! Container hierarchy and carried weight.
//!
//! An item's effective weight is its raw weight times the product of the
//! multipliers of every container around it. A container's own weight is
//! scaled by its parents only, so a Bag of Holding still weighs 15 lb while
//! everything inside it weighs nothing.

use std::collections::{HashMap, HashSet};

use sheetforge_domain::{
    CharacterRecord, ContainerItem, InventoryItem, InventoryResult, SkipReason, SkipRecord,
    COINS_PER_POUND,
};

use super::{Resolved, ResolverIssue};
use crate::context::ResolutionContext;

pub fn resolve_inventory(
    record: &CharacterRecord,
    context: &ResolutionContext,
) -> Resolved<InventoryResult> {
    let character_id = record.id.get();
    let mut result = InventoryResult::default();
    let mut issues = Vec::new();

    let mut items = Vec::with_capacity(record.inventory.len());
    for raw in &record.inventory {
        let Some(definition) = &raw.definition else {
            result.skipped.push(SkipRecord::new(
                format!("item {}", raw.id),
                SkipReason::MissingDefinition,
            ));
            continue;
        };
        items.push(InventoryItem {
            id: raw.id,
            name: definition.name.trim().to_string(),
            quantity: raw.quantity,
            unit_weight: definition.weight.unwrap_or(0.0),
            effective_weight: 0.0,
            container_id: raw.container_entity_id,
            equipped: raw.equipped,
            is_container: definition.is_container,
            weight_multiplier: definition.weight_multiplier,
            cost: definition.cost,
        });
    }
    if !result.skipped.is_empty() {
        issues.push(ResolverIssue::warning(format!(
            "{} items skipped due to missing data",
            result.skipped.len()
        )));
    }

    let mut children: HashMap<i64, Vec<usize>> = HashMap::new();
    for (position, item) in items.iter().enumerate() {
        children.entry(item.container_id).or_default().push(position);
    }

    // Walk down from the character, carrying the enclosing scale.
    let mut reached = vec![false; items.len()];
    let mut opened = HashSet::new();
    let mut stack = vec![(character_id, 1.0_f64)];
    while let Some((parent, scale)) = stack.pop() {
        if !opened.insert(parent) {
            continue;
        }
        for &position in children.get(&parent).into_iter().flatten() {
            if reached[position] {
                continue;
            }
            reached[position] = true;
            let item = &mut items[position];
            item.effective_weight = item.raw_weight() * scale;
            if item.is_container {
                stack.push((item.id, scale * item.weight_multiplier.unwrap_or(1.0)));
            }
        }
    }

    let containers: HashMap<i64, &InventoryItem> = items
        .iter()
        .filter(|i| i.is_container)
        .map(|i| (i.id, i))
        .collect();
    let mut orphaned = 0;
    let mut cyclic = 0;
    for (item, _) in items.iter().zip(&reached).filter(|(_, r)| !**r) {
        let reason = if in_cycle(item.container_id, &containers) {
            cyclic += 1;
            SkipReason::ContainerCycle
        } else {
            orphaned += 1;
            SkipReason::Orphaned {
                container_id: item.container_id,
            }
        };
        result.skipped.push(SkipRecord::new(&item.name, reason));
    }
    if orphaned > 0 {
        issues.push(ResolverIssue::warning(format!(
            "{} items sit in unknown containers and were excluded",
            orphaned
        )));
    }
    if cyclic > 0 {
        issues.push(ResolverIssue::warning(format!(
            "{} items sit in a container cycle and were excluded",
            cyclic
        )));
    }

    for (position, item) in items.iter().enumerate() {
        if !reached[position] || !item.is_container {
            continue;
        }
        let contents: Vec<InventoryItem> = children
            .get(&item.id)
            .into_iter()
            .flatten()
            .filter(|&&p| reached[p])
            .map(|&p| items[p].clone())
            .collect();
        let contents_weight =
            descendant_weight(item.id, &children, &items, &reached, &mut HashSet::new());
        result.containers.push(ContainerItem {
            item: item.clone(),
            contents,
            contents_weight,
            aggregate_weight: item.effective_weight + contents_weight,
        });
    }

    result.items = items
        .into_iter()
        .zip(reached)
        .filter_map(|(item, r)| r.then_some(item))
        .collect();
    result.item_weight = result.items.iter().map(|i| i.effective_weight).sum();
    if context.settings().include_coin_weight {
        result.coin_weight = record.currencies.coin_count() as f64 / COINS_PER_POUND;
    }
    result.total_weight = result.item_weight + result.coin_weight;

    Resolved::with_issues(result, issues)
}

/// Whether following container links from `start` loops back on itself.
fn in_cycle(start: i64, containers: &HashMap<i64, &InventoryItem>) -> bool {
    let mut seen = HashSet::new();
    let mut current = start;
    while let Some(container) = containers.get(&current) {
        if !seen.insert(current) {
            return true;
        }
        current = container.container_id;
    }
    false
}

fn descendant_weight(
    container_id: i64,
    children: &HashMap<i64, Vec<usize>>,
    items: &[InventoryItem],
    reached: &[bool],
    visited: &mut HashSet<i64>,
) -> f64 {
    if !visited.insert(container_id) {
        return 0.0;
    }
    children
        .get(&container_id)
        .into_iter()
        .flatten()
        .filter(|&&p| reached[p])
        .map(|&p| {
            let item = &items[p];
            let nested = if item.is_container {
                descendant_weight(item.id, children, items, reached, visited)
            } else {
                0.0
            };
            item.effective_weight + nested
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use sheetforge_domain::ResolverSettings;

    fn record(inventory: serde_json::Value) -> CharacterRecord {
        serde_json::from_value(json!({
            "id": 7,
            "classes": [],
            "inventory": inventory,
            "currencies": {"gp": 100}
        }))
        .expect("valid record")
    }

    fn item(id: i64, container: i64, name: &str, weight: f64) -> serde_json::Value {
        json!({
            "id": id,
            "containerEntityId": container,
            "definition": {"name": name, "weight": weight}
        })
    }

    fn container(
        id: i64,
        parent: i64,
        name: &str,
        weight: f64,
        multiplier: f64,
    ) -> serde_json::Value {
        json!({
            "id": id,
            "containerEntityId": parent,
            "definition": {
                "name": name,
                "weight": weight,
                "isContainer": true,
                "weightMultiplier": multiplier
            }
        })
    }

    fn resolve(record: &CharacterRecord) -> Resolved<InventoryResult> {
        resolve_inventory(record, &ResolutionContext::default())
    }

    #[test]
    fn magic_container_contents_weigh_nothing() {
        let record = record(json!([
            container(1, 7, "Backpack", 5.0, 1.0),
            item(2, 1, "Rope", 10.0),
            container(3, 7, "Bag of Holding", 15.0, 0.0),
            item(4, 3, "Anvil", 500.0),
            {"id": 5, "quantity": 10, "containerEntityId": 7,
             "definition": {"name": "Torch", "weight": 1.0}}
        ]));
        let resolved = resolve(&record);
        let inventory = &resolved.value;

        assert_eq!(inventory.item(4).map(|i| i.effective_weight), Some(0.0));
        let bag = inventory.container(3).expect("bag");
        assert_eq!(bag.contents.len(), 1);
        assert_eq!(bag.contents_weight, 0.0);
        assert_eq!(bag.aggregate_weight, 15.0);
        let backpack = inventory.container(1).expect("backpack");
        assert_eq!(backpack.aggregate_weight, 15.0);
        assert_eq!(inventory.item_weight, 40.0);
        assert_eq!(inventory.total_weight, 40.0);
        assert!(resolved.is_clean());
    }

    #[test]
    fn nested_multipliers_compound() {
        let record = record(json!([
            container(1, 7, "Sack", 1.0, 0.5),
            container(2, 1, "Pouch", 2.0, 0.5),
            item(3, 2, "Gem Pile", 8.0)
        ]));
        let inventory = resolve(&record).value;
        assert_eq!(inventory.item(2).map(|i| i.effective_weight), Some(1.0));
        assert_eq!(inventory.item(3).map(|i| i.effective_weight), Some(2.0));
        let sack = inventory.container(1).expect("sack");
        assert_eq!(sack.contents.len(), 1);
        assert_eq!(sack.contents_weight, 3.0);
        assert_eq!(inventory.total_weight, 4.0);
    }

    #[test]
    fn orphaned_items_are_skipped_and_weightless() {
        let record = record(json!([
            item(1, 7, "Lantern", 2.0),
            item(2, 999, "Lost Sword", 3.0)
        ]));
        let resolved = resolve(&record);
        assert_eq!(resolved.value.items.len(), 1);
        assert_eq!(resolved.value.total_weight, 2.0);
        assert_eq!(
            resolved.value.skipped,
            vec![SkipRecord::new(
                "Lost Sword",
                SkipReason::Orphaned { container_id: 999 }
            )]
        );
        assert_eq!(resolved.warnings().count(), 1);
    }

    #[test]
    fn container_cycles_are_broken() {
        let record = record(json!([
            container(1, 2, "Box A", 1.0, 1.0),
            container(2, 1, "Box B", 1.0, 1.0),
            item(3, 1, "Marble", 0.1),
            item(4, 7, "Dagger", 1.0)
        ]));
        let resolved = resolve(&record);
        assert_eq!(resolved.value.items.len(), 1);
        assert!(resolved
            .value
            .skipped
            .iter()
            .all(|s| s.reason == SkipReason::ContainerCycle));
        assert_eq!(resolved.value.skipped.len(), 3);
        assert_eq!(resolved.value.total_weight, 1.0);
    }

    #[test]
    fn items_without_definition_warn() {
        let record = record(json!([
            {"id": 1, "containerEntityId": 7},
            item(2, 7, "Shield", 6.0)
        ]));
        let resolved = resolve(&record);
        assert_eq!(resolved.value.skipped[0].reason, SkipReason::MissingDefinition);
        assert_eq!(
            resolved.warnings().collect::<Vec<_>>(),
            vec!["1 items skipped due to missing data"]
        );
        assert_eq!(resolved.value.total_weight, 6.0);
    }

    #[test]
    fn coin_weight_only_when_enabled() {
        let record = record(json!([item(1, 7, "Shield", 6.0)]));
        assert_eq!(resolve(&record).value.coin_weight, 0.0);

        let settings = ResolverSettings::default().with_coin_weight(true);
        let inventory = resolve_inventory(&record, &ResolutionContext::new(settings)).value;
        assert_eq!(inventory.coin_weight, 2.0);
        assert_eq!(inventory.total_weight, 8.0);
    }
}
