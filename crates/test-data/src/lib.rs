pub struct TestModel {
    pub text: &'static str,
    /// Non-degenerate triangles in the model.
    pub triangles: usize,
}

pub const TRI_SINGLE: TestModel = TestModel {
    text: include_str!("../../../res/single/single.tri"),
    triangles: 1,
};

pub const TRI_PAIR: TestModel = TestModel {
    text: include_str!("../../../res/pair/pair.tri"),
    triangles: 2,
};

pub const TRI_HEXAGON_FAN: TestModel = TestModel {
    text: include_str!("../../../res/hexagon-fan/fan.tri"),
    triangles: 6,
};

pub const TRI_GRID: TestModel = TestModel {
    text: include_str!("../../../res/grid/grid-4x4.tri"),
    triangles: 32,
};

pub const TRI_BOWTIE: TestModel = TestModel {
    text: include_str!("../../../res/bowtie/bowtie.tri"),
    triangles: 2,
};

// The file lists three triangles, one of them collinear.
pub const TRI_SLIVER: TestModel = TestModel {
    text: include_str!("../../../res/degenerate/square-with-sliver.tri"),
    triangles: 2,
};

/// Has one short vertex line, one long triangle line and one out of range index.
pub const TRI_INVALID: &str = include_str!("../../../res/invalid/bad-lines.tri");

/// Every well formed model, for property style tests.
pub const ALL_MODELS: &[&TestModel] = &[
    &TRI_SINGLE,
    &TRI_PAIR,
    &TRI_HEXAGON_FAN,
    &TRI_GRID,
    &TRI_BOWTIE,
    &TRI_SLIVER,
];
