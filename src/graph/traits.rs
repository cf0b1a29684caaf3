use std::fmt::Debug;
use num_traits::{CheckedAdd, Zero};
use ordered_float::OrderedFloat;

/// Arc weight: an ordered additive type with a zero.
///
/// Implemented for the primitive integers and `OrderedFloat`; plain `f64` does
/// not qualify since it has no total order.
pub trait Weight: Copy + Ord + Zero + Debug {
    /// Sum of two weights, `None` when the result is not representable
    fn checked_sum(self, other: Self) -> Option<Self>;
}

macro_rules! impl_integer_weight {
    ($($t:ty),*) => {
        $(
            impl Weight for $t {
                fn checked_sum(self, other: Self) -> Option<Self> {
                    CheckedAdd::checked_add(&self, &other)
                }
            }
        )*
    };
}

impl_integer_weight!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

impl Weight for OrderedFloat<f64> {
    fn checked_sum(self, other: Self) -> Option<Self> {
        let sum = self.into_inner() + other.into_inner();
        sum.is_finite().then_some(OrderedFloat(sum))
    }
}

impl Weight for OrderedFloat<f32> {
    fn checked_sum(self, other: Self) -> Option<Self> {
        let sum = self.into_inner() + other.into_inner();
        sum.is_finite().then_some(OrderedFloat(sum))
    }
}

/// Trait representing a weighted directed graph
pub trait Graph<W>: Debug
where
    W: Weight,
{
    /// Returns the number of vertices in the graph
    fn vertex_count(&self) -> usize;

    /// Returns the number of arcs in the graph, duplicates included
    fn edge_count(&self) -> usize;

    /// Returns an iterator over every arc inserted from a vertex, in insertion order
    fn outgoing_edges(&self, vertex: usize) -> Box<dyn Iterator<Item = (usize, W)> + '_>;

    /// Returns true if the vertex exists in the graph
    fn has_vertex(&self, vertex: usize) -> bool {
        vertex < self.vertex_count()
    }

    /// Returns true if there's an arc between the two distinct vertices
    fn has_edge(&self, from: usize, to: usize) -> bool {
        from != to && self.get_edge_weight(from, to).is_some()
    }

    /// Gets the matrix cell for an arc: the latest weight inserted, zero on the
    /// diagonal, `None` when there is no arc
    fn get_edge_weight(&self, from: usize, to: usize) -> Option<W>;
}
