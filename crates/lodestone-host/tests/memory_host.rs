use lodestone_host::ids::{namespaced, strip_namespace};
use lodestone_host::{
    BlockHandle, BlockPermutationHandle, BlockTypeHandle, Host, ItemStackHandle, ItemTypeHandle,
    MemoryHost, StackSizes, StateValue,
};
use proptest::prelude::*;

fn host() -> MemoryHost {
    MemoryHost::new(StackSizes::vanilla())
        .with_items(["stone", "ender_pearl", "minecraft:diamond_sword", "acacia_door"])
        .with_blocks(["stone", "acacia_door", "water"])
}

#[test]
fn registries_accept_bare_and_namespaced_ids() {
    let host = host();
    assert_eq!(host.item_count(), 4);
    assert_eq!(host.block_count(), 3);

    let bare = host.item_type("stone").unwrap();
    let full = host.item_type("minecraft:stone").unwrap();
    assert_eq!(bare, full);
    assert_eq!(bare.id(), "minecraft:stone");

    assert_eq!(host.item_type("diamond_sword").unwrap().id(), "minecraft:diamond_sword");
    assert!(host.item_type("water").is_none());
    assert_eq!(host.block_type("water").unwrap().id(), "minecraft:water");
    assert!(host.block_type("ender_pearl").is_none());
}

#[test]
fn stack_sizes_come_from_the_table() {
    let host = host();
    let pearl = host.item_type("ender_pearl").unwrap();
    let sword = host.item_type("diamond_sword").unwrap();
    let stone = host.item_type("stone").unwrap();
    assert_eq!(host.max_stack_size(&pearl), 16);
    assert_eq!(host.max_stack_size(&sword), 1);
    assert_eq!(host.max_stack_size(&stone), 64);
}

#[test]
fn item_stacks_clamp_their_amount() {
    let host = host();
    assert_eq!(host.item_stack("ender_pearl", 40).unwrap().amount(), 16);
    assert_eq!(host.item_stack("stone", 0).unwrap().amount(), 1);
    assert_eq!(host.item_stack("stone", 12).unwrap().amount(), 12);
    let stack = host.item_stack("minecraft:stone", 3).unwrap();
    assert_eq!(stack.type_id(), "minecraft:stone");
    assert_eq!(stack.item_type().id(), "minecraft:stone");
    assert!(host.item_stack("bedrock", 1).is_none());
}

#[test]
fn placed_blocks_report_their_permutation() {
    let host = host();
    let perm = host
        .permutation("acacia_door")
        .unwrap()
        .with_state("open_bit", StateValue::Bool(true))
        .with_state("direction", StateValue::Int(2));
    assert_eq!(perm.type_id(), "minecraft:acacia_door");
    assert_eq!(perm.block_type().id(), "minecraft:acacia_door");
    assert_eq!(perm.state("open_bit"), Some(&StateValue::Bool(true)));
    assert!(perm.state("upper_block_bit").is_none());
    let names: Vec<&str> = perm.states().map(|(k, _)| k).collect();
    assert_eq!(names, vec!["direction", "open_bit"]);

    let block = host.place([4, 64, -2], perm.clone());
    assert_eq!(block.position(), [4, 64, -2]);
    assert_eq!(block.type_id(), "minecraft:acacia_door");
    assert_eq!(block.permutation(), perm);
    assert!(host.permutation("ender_pearl").is_none());
}

#[test]
fn state_values_render() {
    assert_eq!(StateValue::Bool(false).to_string(), "false");
    assert_eq!(StateValue::Int(3).to_string(), "3");
    assert_eq!(StateValue::Str("north".into()).to_string(), "\"north\"");
}

#[test]
fn registering_returns_the_handle() {
    let mut host = MemoryHost::default();
    let ty = host.register_item("custom:widget");
    assert_eq!(ty.id(), "custom:widget");
    assert_eq!(host.item_type("custom:widget"), Some(ty));
    let block = host.register_block("granite");
    assert_eq!(block.id(), "minecraft:granite");
}

fn bare_id() -> impl Strategy<Value = String> {
    "[a-z_]{1,24}"
}

proptest! {
    // Namespacing a bare id and stripping it again is lossless
    #[test]
    fn namespace_roundtrip(id in bare_id()) {
        let full = namespaced(&id);
        prop_assert_eq!(strip_namespace(&full), id.as_str());
        prop_assert_eq!(namespaced(&full), full.clone());
    }

    // Foreign namespaces survive stripping untouched
    #[test]
    fn foreign_namespace_is_kept(ns in "[a-z]{1,8}", id in bare_id()) {
        prop_assume!(ns != "minecraft");
        let full = format!("{ns}:{id}");
        prop_assert_eq!(strip_namespace(&full), full.as_str());
    }

    // Whatever amount is requested, a stack stays within 1..=max
    #[test]
    fn stack_amount_in_range(amount in any::<u8>()) {
        let host = host();
        for id in ["stone", "ender_pearl", "diamond_sword"] {
            let stack = host.item_stack(id, amount).unwrap();
            let max = host.max_stack_size(stack.item_type());
            prop_assert!(stack.amount() >= 1 && stack.amount() <= max);
        }
    }
}
