/// How the next strip seed is chosen once a strip can no longer grow.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum SeedOrder {
    /// Re-sort the remaining triangles by free-degree after every strip and
    /// take the first. Ties keep the order of the previous pool.
    #[default]
    Resort,
    /// Keep remaining triangles in a min-heap keyed by (free-degree, id) and
    /// refresh entries as neighbours are consumed. Ties go to the lowest id.
    PriorityQueue,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct StripperConfig {
    pub seed_order: SeedOrder,
}
