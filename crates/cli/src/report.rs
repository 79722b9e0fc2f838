//! Serializable views of catalog entries, tiles and fills.

use anyhow::{ensure, Context, Result};
use isohedral::{all_types, Affine2, FillCfg, IsohedralTiling};
use nalgebra::Vector2;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct TypeSummary {
    pub index: usize,
    pub ih_number: u8,
    pub symmetry_group: &'static str,
    pub vertex_config: &'static str,
    pub num_params: usize,
    pub num_vertices: usize,
    pub num_aspects: usize,
    pub num_colours: u8,
    pub edge_shapes: String,
    pub default_params: &'static [f64],
}

pub fn type_summaries() -> Vec<TypeSummary> {
    all_types()
        .iter()
        .enumerate()
        .map(|(index, t)| TypeSummary {
            index,
            ih_number: t.ih_number,
            symmetry_group: t.symmetry_group,
            vertex_config: t.vertex_config,
            num_params: t.num_params,
            num_vertices: t.num_vertices,
            num_aspects: t.num_aspects,
            num_colours: t.colour_count(),
            edge_shapes: t.edge_shape_string(),
            default_params: t.default_params,
        })
        .collect()
}

fn point(v: Vector2<f64>) -> [f64; 2] {
    [v.x, v.y]
}

fn rows(m: &Affine2) -> [f64; 6] {
    m.to_rows()
}

#[derive(Debug, Serialize)]
pub struct EdgeReport {
    pub index: usize,
    pub id: usize,
    pub shape: char,
    pub reversed: bool,
    pub transform: [f64; 6],
}

#[derive(Debug, Serialize)]
pub struct PartReport {
    pub edge: usize,
    pub id: usize,
    pub shape: char,
    pub part: usize,
    pub reversed: bool,
    pub transform: [f64; 6],
}

#[derive(Debug, Serialize)]
pub struct TileReport {
    pub tiling_type: usize,
    pub symmetry_group: &'static str,
    pub params: Vec<f64>,
    pub vertices: Vec<[f64; 2]>,
    pub edges: Vec<EdgeReport>,
    pub parts: Vec<PartReport>,
    pub aspects: Vec<[f64; 6]>,
    pub t1: [f64; 2],
    pub t2: [f64; 2],
}

/// Tiling of `tiling_type`, at `params` when given.
pub fn build_tiling(tiling_type: usize, params: Option<&[f64]>) -> Result<IsohedralTiling> {
    let mut tiling = IsohedralTiling::new(tiling_type)
        .with_context(|| format!("selecting tiling type {tiling_type}"))?;
    if let Some(p) = params {
        tiling
            .set_parameters(p)
            .with_context(|| format!("setting parameters of type {tiling_type}"))?;
    }
    Ok(tiling)
}

pub fn tile_report(tiling: &IsohedralTiling) -> TileReport {
    TileReport {
        tiling_type: tiling.tiling_type(),
        symmetry_group: tiling.type_data().symmetry_group,
        params: tiling.parameters().to_vec(),
        vertices: tiling.vertices().iter().copied().map(point).collect(),
        edges: tiling
            .shape()
            .map(|e| EdgeReport {
                index: e.index,
                id: e.id,
                shape: e.shape.as_char(),
                reversed: e.reversed,
                transform: rows(&e.transform),
            })
            .collect(),
        parts: tiling
            .parts()
            .map(|p| PartReport {
                edge: p.edge,
                id: p.id,
                shape: p.shape.as_char(),
                part: p.part,
                reversed: p.reversed,
                transform: rows(&p.transform),
            })
            .collect(),
        aspects: (0..tiling.num_aspects())
            .map(|a| rows(&tiling.aspect_transform(a)))
            .collect(),
        t1: point(tiling.t1()),
        t2: point(tiling.t2()),
    }
}

#[derive(Debug, Serialize)]
pub struct PlacementReport {
    pub t1: i64,
    pub t2: i64,
    pub aspect: usize,
    pub colour: u8,
    pub transform: [f64; 6],
}

#[derive(Debug, Serialize)]
pub struct FillReport {
    pub tiling_type: usize,
    pub region: [f64; 4],
    pub slabs: usize,
    pub placements: Vec<PlacementReport>,
}

/// Every placement covering the box `[xmin, ymin, xmax, ymax]`, with colours.
pub fn fill_report(tiling: &IsohedralTiling, region: &[f64], cfg: FillCfg) -> Result<FillReport> {
    ensure!(
        region.len() == 4,
        "box needs xmin,ymin,xmax,ymax, got {} values",
        region.len()
    );
    let (xmin, ymin, xmax, ymax) = (region[0], region[1], region[2], region[3]);
    ensure!(xmin <= xmax && ymin <= ymax, "box corners out of order");
    let quad = [
        Vector2::new(xmin, ymin),
        Vector2::new(xmax, ymin),
        Vector2::new(xmax, ymax),
        Vector2::new(xmin, ymax),
    ];
    let fill = tiling.fill_region_with(quad, cfg);
    let placements = fill
        .iter()
        .map(|p| PlacementReport {
            t1: p.t1,
            t2: p.t2,
            aspect: p.aspect,
            colour: tiling.colour(p.t1, p.t2, p.aspect),
            transform: rows(&p.transform),
        })
        .collect();
    Ok(FillReport {
        tiling_type: tiling.tiling_type(),
        region: [xmin, ymin, xmax, ymax],
        slabs: fill.slabs().len(),
        placements,
    })
}
