use transit_sssp::algorithm::path::reconstruct;
use transit_sssp::data_structures::OrderedWorkingSet;
use transit_sssp::Distance;

#[test]
fn test_working_set_orders_by_priority_then_vertex() {
    let mut ws: OrderedWorkingSet<usize, u32> = OrderedWorkingSet::new();
    ws.insert(3, 10);
    ws.insert(1, 5);
    ws.insert(2, 5);

    assert_eq!(ws.len(), 3);
    assert_eq!(ws.peek_min(), Some((1, 5)));
    assert_eq!(ws.pop_min(), Some((1, 5)));
    assert_eq!(ws.pop_min(), Some((2, 5)));
    assert_eq!(ws.pop_min(), Some((3, 10)));
    assert!(ws.is_empty());
    assert_eq!(ws.pop_min(), None);
}

#[test]
fn test_working_set_decrease_by_remove_and_insert() {
    let mut ws: OrderedWorkingSet<usize, u32> = OrderedWorkingSet::new();
    ws.insert(7, 40);
    ws.insert(8, 20);

    assert!(ws.remove(7, 40));
    assert!(!ws.remove(7, 40));
    ws.insert(7, 10);

    assert_eq!(ws.len(), 2);
    assert_eq!(ws.pop_min(), Some((7, 10)));
    ws.clear();
    assert!(ws.is_empty());
}

#[test]
fn test_reconstruct_walks_back_to_origin() {
    // 0 -> 2 -> 1 -> 3, vertex 4 unreached
    let predecessors = vec![None, Some(2), Some(0), Some(1), None];

    assert_eq!(reconstruct(&predecessors, 0, 3), vec![0, 2, 1, 3]);
    assert_eq!(reconstruct(&predecessors, 0, 0), vec![0]);
    assert!(reconstruct(&predecessors, 0, 4).is_empty());
    assert!(reconstruct(&predecessors, 0, 9).is_empty());
}

#[test]
fn test_reconstruct_rejects_chain_from_other_root() {
    let predecessors = vec![None, None, Some(1)];
    assert!(reconstruct(&predecessors, 0, 2).is_empty());
}

#[test]
fn test_distance_ordering_and_extension() {
    let near: Distance<u32> = Distance::Finite(3);
    let unreachable: Distance<u32> = Distance::Unreachable;

    assert!(near < unreachable);
    assert!(Distance::Finite(u32::MAX) < unreachable);
    assert_eq!(near.extend(4), Distance::Finite(7));
    assert_eq!(unreachable.extend(4), Distance::Unreachable);
    assert_eq!(Distance::Finite(u32::MAX - 1).extend(5), Distance::Unreachable);
    assert_eq!(Distance::Finite(u32::MAX - 1).extend(1), Distance::Finite(u32::MAX));
    assert_eq!(Distance::<u32>::zero(), Distance::Finite(0));
    assert_eq!(near.finite(), Some(3));
    assert_eq!(Distance::from(None::<u32>), Distance::Unreachable);
    assert_eq!(unreachable.to_string(), "unreachable");
}
