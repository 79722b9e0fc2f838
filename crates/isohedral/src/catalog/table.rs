//! Static table of the 81 tiling types.
//!
//! Derived from the Delaney symbols of the isohedral tilings: each type's tile
//! is realised on its Laves polygon, and the free vertex coordinates left after
//! the adjacency and stabiliser constraints become the parameters. Entries are
//! data only; `super::tests` checks their structural invariants.

use super::EdgeShape::{I, J, S, U};
use super::{TilingTypeData, NUM_TYPES};

#[rustfmt::skip]
pub(super) static TILING_TYPES: [TilingTypeData; NUM_TYPES] = [
    // 0: IH01, p1, 3.3.3.3.3.3
    TilingTypeData {
        num_params: 4,
        num_aspects: 1,
        num_vertices: 6,
        num_edge_shapes: 3,
        edge_shapes: &[J, J, J],
        edge_orientations: &[false, false, false, false, false, false, false, true, false, true, false, true],
        edge_shape_ids: &[0, 1, 2, 0, 1, 2],
        default_params: &[0.012267, 1.732286, -0.529498, 0.82315],
        tiling_vertex_coeffs: &[0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, -1.0, 0.0, 1.0, 0.0, 1.0, 0.0, -1.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0],
        translation_vector_coeffs: &[1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, -1.0, 0.0, 0.0, 0.0, 1.0, 0.0],
        aspect_xform_coeffs: &[0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0],
        colouring: [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 2, 0, 2, 0, 1, 3],
        symmetry_group: "p1",
        vertex_config: "3.3.3.3.3.3",
        ih_number: 1,
    },
    // 1: IH03, pg, 3.3.3.3.3.3
    TilingTypeData {
        num_params: 4,
        num_aspects: 2,
        num_vertices: 6,
        num_edge_shapes: 3,
        edge_shapes: &[J, J, J],
        edge_orientations: &[false, false, false, false, true, true, false, false, false, true, true, true],
        edge_shape_ids: &[0, 1, 0, 2, 1, 2],
        default_params: &[-0.016856, 1.773032, -0.555756, 0.838638],
        tiling_vertex_coeffs: &[0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.5773502691896256, 1.0, -0.5773502691896257, 1.0, 0.0, -1.0, 0.0, 1.0, 0.0, 1.0, 0.5773502691896256, 0.0, -0.5773502691896257, 1.0, 0.0, -0.5, 0.8660254037844386, 0.0, 0.0, 1.0, 0.8660254037844386, 0.5, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0],
        translation_vector_coeffs: &[0.0, 0.0, -1.0, 0.0, 1.0, 0.0, 0.0, 0.5773502691896256, 0.0, -0.5773502691896257, 0.5, 0.8660254037844386, 0.0, 0.0, 0.0, 0.8660254037844386, 1.5, 0.0, 0.0, 0.0],
        aspect_xform_coeffs: &[0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, -0.5, 0.0, 0.0, 0.0, 0.0, 0.8660254037844386, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.8660254037844386, 0.0, 0.0, 0.0, 0.0, 0.5, 0.0, 1.0, 0.0, 0.0, 0.0],
        colouring: [0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 2, 0, 0, 1, 2, 3],
        symmetry_group: "pg",
        vertex_config: "3.3.3.3.3.3",
        ih_number: 3,
    },
    // 2: IH02, pg, 3.3.3.3.3.3
    TilingTypeData {
        num_params: 4,
        num_aspects: 2,
        num_vertices: 6,
        num_edge_shapes: 3,
        edge_shapes: &[J, J, J],
        edge_orientations: &[false, false, true, true, false, false, false, false, true, true, false, true],
        edge_shape_ids: &[0, 0, 1, 2, 2, 1],
        default_params: &[-0.022489, 1.727463, -0.487109, 0.92572],
        tiling_vertex_coeffs: &[0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 1.7320508075688776, 1.0, -1.7320508075688776, -1.0, -1.7320508075688774, 1.5, 0.8660254037844386, -1.5, -0.8660254037844386, 0.0, 0.8660254037844386, 0.5, -0.8660254037844386, -0.5, 0.0, 1.5, 0.8660254037844386, -0.5, -0.8660254037844386, 0.0, 0.8660254037844386, 0.5, -0.8660254037844386, 0.5, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0],
        translation_vector_coeffs: &[1.5, 0.8660254037844386, -1.5, -0.8660254037844386, 0.0, 0.8660254037844386, 0.5, -0.8660254037844386, -0.5, 0.0, 1.0, 0.0, -0.5, -0.8660254037844386, -1.0, -1.7320508075688774, 0.0, 0.8660254037844388, 1.5, 1.7320508075688772],
        aspect_xform_coeffs: &[0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.5, 0.0, 0.0, 0.0, 0.0, 0.8660254037844386, -0.5, -0.8660254037844386, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.8660254037844386, 0.0, 0.0, 0.0, 0.0, -0.5, -0.8660254037844386, 0.5, 0.0, 1.0, 0.0],
        colouring: [0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 2, 0, 0, 1, 2, 3],
        symmetry_group: "pg",
        vertex_config: "3.3.3.3.3.3",
        ih_number: 2,
    },
    // 3: IH14, cm, 3.3.3.3.3.3
    TilingTypeData {
        num_params: 2,
        num_aspects: 1,
        num_vertices: 6,
        num_edge_shapes: 2,
        edge_shapes: &[J, I],
        edge_orientations: &[false, false, false, false, true, true, false, true, false, true, true, false],
        edge_shape_ids: &[0, 1, 0, 0, 1, 0],
        default_params: &[1.701992, 0.848645],
        tiling_vertex_coeffs: &[0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 2.0, -1.7320508075688774, 0.5773502691896256, -0.5773502691896257, 1.0, 1.0, 1.0, -1.7320508075688774, 0.5773502691896255, 1.1547005383792517, -1.0, 1.0, 2.0, -1.7320508075688774, 0.5773502691896254, 1.154700538379252, -2.0, 1.0, 0.0, 0.0, 0.0, 1.7320508075688776, -2.0, 0.0, 1.0, 0.0],
        translation_vector_coeffs: &[0.5773502691896257, -0.5773502691896257, 1.0, 1.0, 1.0, -1.7320508075688772, 0.5773502691896257, 1.1547005383792515, -2.0, 1.0, 0.0, 0.0],
        aspect_xform_coeffs: &[0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0],
        colouring: [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 2, 0, 2, 0, 1, 3],
        symmetry_group: "cm",
        vertex_config: "3.3.3.3.3.3",
        ih_number: 14,
    },
    // 4: IH15, cm, 3.3.3.3.3.3
    TilingTypeData {
        num_params: 2,
        num_aspects: 1,
        num_vertices: 6,
        num_edge_shapes: 2,
        edge_shapes: &[U, J],
        edge_orientations: &[false, false, false, false, true, true, true, true, false, true, true, false],
        edge_shape_ids: &[0, 1, 1, 0, 1, 1],
        default_params: &[-0.464253, 0.848851],
        tiling_vertex_coeffs: &[0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, -1.0, 0.0, 1.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 2.0, 0.0, 0.0, 0.0, 0.0, 0.0, 2.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0],
        translation_vector_coeffs: &[-1.0, 0.0, 1.0, 0.0, 1.0, 0.0, 1.0, 0.0, -1.0, 0.0, 1.0, 0.0],
        aspect_xform_coeffs: &[0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0],
        colouring: [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 2, 0, 1, 2, 0, 3],
        symmetry_group: "cm",
        vertex_config: "3.3.3.3.3.3",
        ih_number: 15,
    },
    // 5: IH04, p2, 3.3.3.3.3.3
    TilingTypeData {
        num_params: 6,
        num_aspects: 2,
        num_vertices: 6,
        num_edge_shapes: 5,
        edge_shapes: &[S, S, J, S, S],
        edge_orientations: &[false, false, false, false, false, false, false, false, false, false, false, true],
        edge_shape_ids: &[0, 1, 2, 3, 4, 2],
        default_params: &[1.049842, 1.774383, 0.020226, 1.710923, -0.473357, 0.918845],
        tiling_vertex_coeffs: &[0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, -1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, -1.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0],
        translation_vector_coeffs: &[1.0, 0.0, 0.0, 0.0, -1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, -1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 1.0, 0.0, -1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 1.0, 0.0],
        aspect_xform_coeffs: &[0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, -1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, -1.0, 0.0, 1.0, 0.0, 1.0, 0.0, 0.0, 0.0],
        colouring: [0, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 2, 0, 0, 1, 2, 3],
        symmetry_group: "p2",
        vertex_config: "3.3.3.3.3.3",
        ih_number: 4,
    },
    // 6: IH08, p2, 3.3.3.3.3.3
    TilingTypeData {
        num_params: 4,
        num_aspects: 1,
        num_vertices: 6,
        num_edge_shapes: 3,
        edge_shapes: &[S, S, S],
        edge_orientations: &[false, false, false, false, false, false, false, true, false, true, false, true],
        edge_shape_ids: &[0, 1, 2, 0, 1, 2],
        default_params: &[-0.045072, 1.772915, -0.559637, 0.877389],
        tiling_vertex_coeffs: &[0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, -1.0, 0.0, 1.0, 0.0, 1.0, 0.0, -1.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0],
        translation_vector_coeffs: &[1.0, 0.0, -1.0, 0.0, 1.0, 0.0, 1.0, 0.0, -1.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0],
        aspect_xform_coeffs: &[0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0],
        colouring: [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 2, 0, 2, 0, 1, 3],
        symmetry_group: "p2",
        vertex_config: "3.3.3.3.3.3",
        ih_number: 8,
    },
    // 7: IH06, pgg, 3.3.3.3.3.3
    TilingTypeData {
        num_params: 5,
        num_aspects: 4,
        num_vertices: 6,
        num_edge_shapes: 4,
        edge_shapes: &[S, J, J, S],
        edge_orientations: &[false, false, false, false, false, false, true, true, false, false, true, true],
        edge_shape_ids: &[0, 1, 2, 1, 3, 2],
        default_params: &[1.736085, 0.000362, 1.712425, -0.442562, 0.822844],
        tiling_vertex_coeffs: &[0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 1.7320508075688772, 1.0, 1.7320508075688776, 1.0, -1.7320508075688772, 1.7320508075688772, -1.0, -1.7320508075688772, -0.5, -0.8660254037844386, 2.0, 1.0, 0.0, 0.0, 0.8660254037844386, -0.5, 0.0, 1.7320508075688774, -1.0, -1.7320508075688772, -1.0, -1.7320508075688774, 2.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0],
        translation_vector_coeffs: &[0.0, -1.0, 0.0, -1.0, 0.0, 1.0, 0.0, 1.7320508075688772, 0.0, 1.7320508075688776, 0.0, -1.7320508075688772, 3.4641016151377544, -1.5, -2.598076211353316, -1.5, -2.598076211353316, 3.0, 2.0, -0.8660254037844386, -1.5, -0.8660254037844386, -1.5, 1.7320508075688772],
        aspect_xform_coeffs: &[0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, -1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 3.4641016151377544, -0.5, -2.598076211353316, -0.5, -2.598076211353316, 3.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, -1.0, 2.0, -0.8660254037844386, -0.5, -0.8660254037844386, -0.5, 1.7320508075688772, 0.0, 0.0, 0.0, 0.0, 0.0, -0.5, 0.0, 0.0, 0.0, 0.0, 0.0, -0.8660254037844386, 1.7320508075688772, 0.5, -0.8660254037844386, 0.5, -0.8660254037844387, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, -0.8660254037844386, 0.0, 0.0, 0.0, 0.0, 0.0, 0.5, 1.0, -0.8660254037844386, -0.5, -0.8660254037844386, -0.5, 1.7320508075688772, 0.0, 0.0, 0.0, 0.0, 0.0, 0.5, 0.0, 0.0, 0.0, 0.0, 0.0, 0.8660254037844386, 1.7320508075688772, -1.0, -1.7320508075688772, -1.0, -1.7320508075688772, 2.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.8660254037844386, 0.0, 0.0, 0.0, 0.0, 0.0, -0.5, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0],
        colouring: [0, 0, 1, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 2, 1, 2, 0, 3],
        symmetry_group: "pgg",
        vertex_config: "3.3.3.3.3.3",
        ih_number: 6,
    },
    // 8: IH05, pgg, 3.3.3.3.3.3
    TilingTypeData {
        num_params: 5,
        num_aspects: 4,
        num_vertices: 6,
        num_edge_shapes: 4,
        edge_shapes: &[S, S, J, J],
        edge_orientations: &[false, false, false, false, false, false, false, false, true, true, false, true],
        edge_shape_ids: &[0, 1, 2, 3, 3, 2],
        default_params: &[-0.036022, 0.043117, 1.766294, -0.524105, 0.851412],
        tiling_vertex_coeffs: &[0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.5, 0.8660254037844386, -1.5, -0.8660254037844386, 0.0, 0.0, 0.8660254037844386, 0.5, -0.8660254037844386, -0.5, 0.0, 0.0, 1.5, 0.8660254037844386, -0.5, -0.8660254037844386, 0.0, 0.0, 0.8660254037844386, 0.5, -0.8660254037844386, 0.5, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0],
        translation_vector_coeffs: &[0.0, 1.5, 0.8660254037844386, -1.5, -0.8660254037844386, 0.0, 0.0, 0.8660254037844386, 0.5, -0.8660254037844386, -0.5, 0.0, 0.8660254037844386, 0.5, -0.8660254037844386, 0.5, -0.8660254037844386, -0.5, -1.5, -0.8660254037844386, 1.5, -0.8660254037844386, 1.5, 0.8660254037844386],
        aspect_xform_coeffs: &[0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, -1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.8660254037844386, 2.0, 0.0, -1.0, -1.7320508075688772, 0.5, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, -1.0, -0.5, 0.0, 2.0, -1.7320508075688772, 1.0, 0.8660254037844386, 0.0, 0.0, 0.0, 0.0, 0.0, 0.5, 0.0, 0.0, 0.0, 0.0, 0.0, 0.8660254037844386, 0.0, 1.0, 0.0, -0.5, -0.8660254037844386, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.8660254037844386, 0.0, 0.0, 0.0, 0.0, 0.0, -0.5, 0.0, 0.0, 1.0, -0.8660254037844386, 0.5, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, -0.5, 0.0, 0.0, 0.0, 0.0, 0.0, -0.8660254037844386, 0.8660254037844386, 1.0, 0.0, -0.5, -0.8660254037844386, 0.5, 0.0, 0.0, 0.0, 0.0, 0.0, -0.8660254037844386, 0.0, 0.0, 0.0, 0.0, 0.0, 0.5, -0.5, 0.0, 1.0, -0.8660254037844386, 0.5, 0.8660254037844386],
        colouring: [0, 2, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 2, 0, 0, 1, 2, 3],
        symmetry_group: "pgg",
        vertex_config: "3.3.3.3.3.3",
        ih_number: 5,
    },
    // 9: IH09, pgg, 3.3.3.3.3.3
    TilingTypeData {
        num_params: 3,
        num_aspects: 2,
        num_vertices: 6,
        num_edge_shapes: 2,
        edge_shapes: &[S, J],
        edge_orientations: &[false, false, false, false, true, true, false, true, false, false, true, true],
        edge_shape_ids: &[0, 1, 1, 0, 1, 1],
        default_params: &[1.685466, -0.456062, 0.901156],
        tiling_vertex_coeffs: &[0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 1.0, 0.0, -2.0, 0.0, 0.0, -1.0, 0.0, 1.0, 1.0, 0.0, -1.0, 0.0, 0.0, 0.0, 0.0, 1.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 2.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0],
        translation_vector_coeffs: &[0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 2.0, 0.0, 0.0, 2.0, 0.0, -2.0, 0.0, 0.0, 0.0, 0.0],
        aspect_xform_coeffs: &[0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, -1.0, 0.0, 0.0, 0.0, 0.0, 0.0, -1.0, 0.0, 2.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 1.0, 0.0],
        colouring: [0, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 2, 0, 0, 1, 2, 3],
        symmetry_group: "pgg",
        vertex_config: "3.3.3.3.3.3",
        ih_number: 9,
    },
    // 10: IH12, pmg, 3.3.3.3.3.3
    TilingTypeData {
        num_params: 3,
        num_aspects: 2,
        num_vertices: 6,
        num_edge_shapes: 3,
        edge_shapes: &[S, I, S],
        edge_orientations: &[false, false, false, false, false, false, true, true, false, true, true, true],
        edge_shape_ids: &[0, 1, 2, 2, 1, 0],
        default_params: &[1.725229, 1.726429, 0.807117],
        tiling_vertex_coeffs: &[0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 2.0, -1.732050807568877, 0.0, 0.5773502691896256, -0.5773502691896257, 1.0, 0.0, 1.0, 1.0, -1.732050807568877, 0.5773502691896257, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.5773502691896258, 1.1547005383792512, -2.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 1.732050807568877, -2.0, 0.0, 0.0, 1.0, 0.0],
        translation_vector_coeffs: &[0.0, 0.0, -1.732050807568877, 3.0, 0.0, 0.0, 1.0, -1.7320508075688772, 0.5773502691896257, 0.5773502691896256, -0.5773502691896257, 0.0, 1.0, 1.0, -1.0, 0.0],
        aspect_xform_coeffs: &[0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, -1.0, 0.0, 0.0, 0.0, 0.0, 0.5773502691896257, 0.5773502691896256, -0.5773502691896257, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, -1.0, 1.0, 1.0, 1.0, -1.732050807568877],
        colouring: [0, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 2, 0, 0, 1, 2, 3],
        symmetry_group: "pmg",
        vertex_config: "3.3.3.3.3.3",
        ih_number: 12,
    },
    // 11: IH13, pmg, 3.3.3.3.3.3
    TilingTypeData {
        num_params: 3,
        num_aspects: 2,
        num_vertices: 6,
        num_edge_shapes: 3,
        edge_shapes: &[U, S, S],
        edge_orientations: &[false, false, false, false, false, false, true, true, true, true, true, true],
        edge_shape_ids: &[0, 1, 2, 0, 2, 1],
        default_params: &[1.786732, -0.516362, 0.862633],
        tiling_vertex_coeffs: &[0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, -1.0, 0.0, 1.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 1.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0],
        translation_vector_coeffs: &[0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 2.0, 0.0, -2.0, 0.0, 0.0, 0.0, 0.0],
        aspect_xform_coeffs: &[0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, -1.0, 0.0, 0.0, 0.0, 0.0, 0.0, -1.0, 0.0, 2.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, -1.0, 1.0, 0.0, 1.0, 0.0],
        colouring: [0, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 2, 0, 0, 1, 2, 3],
        symmetry_group: "pmg",
        vertex_config: "3.3.3.3.3.3",
        ih_number: 13,
    },
    // 12: IH16, cmm, 3.3.3.3.3.3
    TilingTypeData {
        num_params: 2,
        num_aspects: 1,
        num_vertices: 6,
        num_edge_shapes: 2,
        edge_shapes: &[S, I],
        edge_orientations: &[false, false, false, false, true, true, false, true, true, true, true, true],
        edge_shape_ids: &[0, 1, 0, 0, 1, 0],
        default_params: &[1.676162, 0.831727],
        tiling_vertex_coeffs: &[0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 2.0, -1.7320508075688767, 0.5773502691896256, -0.5773502691896257, 1.0, 1.0, 1.0, -1.7320508075688767, 0.5773502691896254, 1.154700538379251, -1.0, 1.0, 2.0, -1.7320508075688767, 0.5773502691896253, 1.154700538379251, -2.0, 1.0, 0.0, 0.0, 0.0, 1.7320508075688767, -2.0, 0.0, 1.0, 0.0],
        translation_vector_coeffs: &[0.5773502691896257, -0.5773502691896253, 1.0, 1.0, 1.0, -1.7320508075688767, 0.5773502691896254, 1.154700538379251, -2.0, 1.0, 0.0, 0.0],
        aspect_xform_coeffs: &[0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0],
        colouring: [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 2, 0, 2, 0, 1, 3],
        symmetry_group: "cmm",
        vertex_config: "3.3.3.3.3.3",
        ih_number: 16,
    },
    // 13: IH07, p3, 3.3.3.3.3.3
    TilingTypeData {
        num_params: 2,
        num_aspects: 3,
        num_vertices: 6,
        num_edge_shapes: 3,
        edge_shapes: &[J, J, J],
        edge_orientations: &[false, false, false, true, false, false, false, true, false, false, false, true],
        edge_shape_ids: &[0, 0, 1, 1, 2, 2],
        default_params: &[-0.505653, 0.853124],
        tiling_vertex_coeffs: &[0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.5, 0.0, 0.0, 0.8660254037844386, 0.5, 0.8660254037844386, 0.5, -0.8660254037844386, 0.5, 0.8660254037844386, 1.5, 0.8660254037844386, 0.0, -0.8660254037844386, 1.5, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0],
        translation_vector_coeffs: &[-1.5, 0.8660254037844387, 1.5, -0.8660254037844383, -1.5, 0.8660254037844386, 1.5, 0.8660254037844387, -1.5, -0.8660254037844387, 1.5, 0.8660254037844387],
        aspect_xform_coeffs: &[0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, -0.5, 0.0, 0.0, -0.8660254037844386, 0.0, 1.7320508075688774, 1.5, 0.0, 0.0, 0.8660254037844386, 0.0, 0.0, -0.5, -1.732050807568877, 0.0, 0.8660254037844386, 0.0, 0.0, -0.5, 0.0, 0.0, 0.8660254037844386, 1.5, 0.8660254037844387, 0.0, 0.0, 0.0, -0.8660254037844386, 0.0, 0.0, -0.5, -0.8660254037844387, 1.5, 1.7320508075688772],
        colouring: [0, 1, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 2, 0, 1, 2, 3],
        symmetry_group: "p3",
        vertex_config: "3.3.3.3.3.3",
        ih_number: 7,
    },
    // 14: IH10, p3, 3.3.3.3.3.3
    TilingTypeData {
        num_params: 0,
        num_aspects: 1,
        num_vertices: 6,
        num_edge_shapes: 1,
        edge_shapes: &[J],
        edge_orientations: &[false, false, false, true, false, false, false, true, false, false, false, true],
        edge_shape_ids: &[0, 0, 0, 0, 0, 0],
        default_params: &[],
        tiling_vertex_coeffs: &[0.0, 0.0, 1.0, 0.0, 1.5, 0.8660254037844386, 1.0, 1.7320508075688772, 0.0, 1.7320508075688772, -0.5, 0.8660254037844386],
        translation_vector_coeffs: &[1.5, 0.8660254037844386, -1.5, 0.8660254037844386],
        aspect_xform_coeffs: &[1.0, 0.0, 0.0, 0.0, 1.0, 0.0],
        colouring: [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 2, 0, 1, 2, 0, 3],
        symmetry_group: "p3",
        vertex_config: "3.3.3.3.3.3",
        ih_number: 10,
    },
    // 15: IH17, p31m, 3.3.3.3.3.3
    TilingTypeData {
        num_params: 1,
        num_aspects: 3,
        num_vertices: 6,
        num_edge_shapes: 2,
        edge_shapes: &[I, J],
        edge_orientations: &[false, false, false, false, false, true, true, true, true, false, false, true],
        edge_shape_ids: &[0, 1, 1, 1, 1, 0],
        default_params: &[1.708613],
        tiling_vertex_coeffs: &[0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.8660254037844386, 0.0, 0.5, 0.0, 0.8660254037844386, -0.5, 1.5, -0.8660254037844386, 0.0, 0.0, 1.0, 0.0, 0.0, -0.5, 0.0, 0.8660254037844386],
        translation_vector_coeffs: &[1.7320508075688772, 0.0, 0.0, 0.0, 0.8660254037844386, 0.0, 1.5, 0.0],
        aspect_xform_coeffs: &[0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.8660254037844386, 0.0, 0.0, 0.0, 0.0, -1.0, 1.5, 0.0, 0.0, -0.5, 0.0, -0.8660254037844386, 1.7320508075688772, 0.0, 0.0, 0.8660254037844386, 0.0, -0.5, 0.0, 0.0],
        colouring: [0, 1, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 2, 0, 1, 2, 3],
        symmetry_group: "p31m",
        vertex_config: "3.3.3.3.3.3",
        ih_number: 17,
    },
    // 16: IH18, p31m, 3.3.3.3.3.3
    TilingTypeData {
        num_params: 0,
        num_aspects: 1,
        num_vertices: 6,
        num_edge_shapes: 1,
        edge_shapes: &[U],
        edge_orientations: &[false, false, true, true, false, false, true, true, false, false, true, true],
        edge_shape_ids: &[0, 0, 0, 0, 0, 0],
        default_params: &[],
        tiling_vertex_coeffs: &[0.0, 0.0, 1.0, 0.0, 1.5, 0.8660254037844386, 1.0, 1.7320508075688772, 0.0, 1.7320508075688772, -0.5, 0.8660254037844386],
        translation_vector_coeffs: &[1.5, 0.8660254037844386, -1.5, 0.8660254037844386],
        aspect_xform_coeffs: &[1.0, 0.0, 0.0, 0.0, 1.0, 0.0],
        colouring: [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 2, 0, 1, 2, 0, 3],
        symmetry_group: "p31m",
        vertex_config: "3.3.3.3.3.3",
        ih_number: 18,
    },
    // 17: IH11, p6, 3.3.3.3.3.3
    TilingTypeData {
        num_params: 0,
        num_aspects: 1,
        num_vertices: 6,
        num_edge_shapes: 1,
        edge_shapes: &[S],
        edge_orientations: &[false, false, false, true, false, true, false, true, false, true, false, true],
        edge_shape_ids: &[0, 0, 0, 0, 0, 0],
        default_params: &[],
        tiling_vertex_coeffs: &[0.0, 0.0, 1.0, 0.0, 1.5, 0.8660254037844386, 1.0, 1.7320508075688785, 0.0, 1.7320508075688779, -0.5, 0.8660254037844386],
        translation_vector_coeffs: &[1.5, 0.8660254037844386, -1.5, 0.8660254037844386],
        aspect_xform_coeffs: &[1.0, 0.0, 0.0, 0.0, 1.0, 0.0],
        colouring: [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 2, 0, 1, 2, 0, 3],
        symmetry_group: "p6",
        vertex_config: "3.3.3.3.3.3",
        ih_number: 11,
    },
    // 18: IH20, p6m, 3.3.3.3.3.3
    TilingTypeData {
        num_params: 0,
        num_aspects: 1,
        num_vertices: 6,
        num_edge_shapes: 1,
        edge_shapes: &[I],
        edge_orientations: &[false, false, true, true, true, true, true, true, true, true, true, true],
        edge_shape_ids: &[0, 0, 0, 0, 0, 0],
        default_params: &[],
        tiling_vertex_coeffs: &[0.0, 0.0, 1.0, 0.0, 1.5, 0.8660254037844386, 1.0, 1.7320508075688776, 0.0, 1.7320508075688776, -0.5, 0.8660254037844386],
        translation_vector_coeffs: &[1.5, 0.8660254037844386, -1.5, 0.8660254037844386],
        aspect_xform_coeffs: &[1.0, 0.0, 0.0, 0.0, 1.0, 0.0],
        colouring: [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 2, 0, 1, 2, 0, 3],
        symmetry_group: "p6m",
        vertex_config: "3.3.3.3.3.3",
        ih_number: 20,
    },
    // 19: IH21, p6, 3.3.3.3.6
    TilingTypeData {
        num_params: 2,
        num_aspects: 6,
        num_vertices: 5,
        num_edge_shapes: 3,
        edge_shapes: &[S, J, J],
        edge_orientations: &[false, false, false, false, false, true, false, false, false, true],
        edge_shape_ids: &[0, 1, 1, 2, 2],
        default_params: &[-1.037204, 1.773161],
        tiling_vertex_coeffs: &[0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.5773502691896257, 0.5, -0.5773502691896257, 0.0, 0.28867513459481287, 0.5, 0.8660254037844386, 0.0, -0.8660254037844386, 0.5, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0],
        translation_vector_coeffs: &[-1.0, 1.7320508075688772, 0.5, -1.7320508075688772, -1.0, 0.8660254037844386, 2.0, 0.0, -1.0, 0.0, 2.0, 0.0],
        aspect_xform_coeffs: &[0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, -1.0, 0.0, 0.0, 0.0, 1.0, 1.7320508075688772, 0.5, 0.0, 0.0, 0.0, 0.0, 0.0, -1.0, -1.7320508075688772, 1.0, 0.8660254037844386, 0.0, 0.0, -0.5, 0.0, 0.0, -0.8660254037844386, 1.5, 0.8660254037844386, 0.0, 0.0, 0.0, 0.8660254037844386, 0.0, 0.0, -0.5, -0.8660254037844386, 1.5, 0.0, 0.0, 0.0, -0.5, 0.0, 0.0, 0.8660254037844386, 0.5, 0.8660254037844386, 0.5, 0.0, 0.0, -0.8660254037844386, 0.0, 0.0, -0.5, -0.8660254037844386, 0.5, 0.8660254037844386, 0.0, 0.0, 0.5, 0.0, 0.0, -0.8660254037844386, 0.5, 0.8660254037844386, 0.0, 0.0, 0.0, 0.8660254037844386, 0.0, 0.0, 0.5, -0.8660254037844386, 0.5, 0.0, 0.0, 0.0, 0.5, 0.0, 0.0, 0.8660254037844386, -0.5, 0.8660254037844386, 0.5, 0.0, 0.0, -0.8660254037844386, 0.0, 0.0, 0.5, -0.8660254037844386, -0.5, 0.8660254037844386],
        colouring: [0, 0, 0, 1, 2, 0, 0, 0, 0, 0, 0, 0, 1, 2, 0, 1, 2, 0, 3],
        symmetry_group: "p6",
        vertex_config: "3.3.3.3.6",
        ih_number: 21,
    },
    // 20: IH25, cm, 3.3.3.4.4
    TilingTypeData {
        num_params: 3,
        num_aspects: 2,
        num_vertices: 5,
        num_edge_shapes: 3,
        edge_shapes: &[I, J, J],
        edge_orientations: &[false, false, false, false, false, false, true, true, false, true],
        edge_shape_ids: &[0, 1, 2, 2, 1],
        default_params: &[1.112863, 0.036981, 0.8342],
        tiling_vertex_coeffs: &[0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 1.0, 0.0, 0.0, 1.0, 0.0, 0.0, 1.0, 0.0, 0.5, 1.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0],
        translation_vector_coeffs: &[0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.5, 1.0, 0.0, 1.0, 0.0],
        aspect_xform_coeffs: &[0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.5, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, -1.0, 1.0, 0.0, 1.0, 0.0],
        colouring: [0, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 2, 0, 0, 1, 2, 3],
        symmetry_group: "cm",
        vertex_config: "3.3.3.4.4",
        ih_number: 25,
    },
    // 21: IH22, p2, 3.3.3.4.4
    TilingTypeData {
        num_params: 4,
        num_aspects: 2,
        num_vertices: 5,
        num_edge_shapes: 4,
        edge_shapes: &[S, S, J, S],
        edge_orientations: &[false, false, false, false, false, false, false, false, false, true],
        edge_shape_ids: &[0, 1, 2, 3, 2],
        default_params: &[0.813937, 2.024864, -0.682858, 1.131029],
        tiling_vertex_coeffs: &[0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, -1.0, 0.0, 0.0, 0.0, 1.0, 0.0, -1.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0],
        translation_vector_coeffs: &[1.0, 0.0, -1.0, 0.0, 0.0, 0.0, 1.0, 0.0, -1.0, 0.0, 0.0, 0.0, 2.0, 0.0, -1.0, 0.0, 0.0, 0.0, 2.0, 0.0],
        aspect_xform_coeffs: &[0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, -1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, -1.0, 0.0, 1.0, 0.0, 1.0, 0.0],
        colouring: [0, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 2, 0, 0, 1, 2, 3],
        symmetry_group: "p2",
        vertex_config: "3.3.3.4.4",
        ih_number: 22,
    },
    // 22: IH23, pgg, 3.3.3.4.4
    TilingTypeData {
        num_params: 3,
        num_aspects: 4,
        num_vertices: 5,
        num_edge_shapes: 3,
        edge_shapes: &[S, J, J],
        edge_orientations: &[false, false, false, false, false, false, true, true, false, true],
        edge_shape_ids: &[0, 1, 2, 2, 1],
        default_params: &[1.094558, 0.021969, 0.80727],
        tiling_vertex_coeffs: &[0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 1.0, 0.0, 0.0, 1.0, 0.0, 0.0, 1.0, 0.0, 0.5, 1.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0],
        translation_vector_coeffs: &[0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 2.0, 0.0, 2.0, 0.0],
        aspect_xform_coeffs: &[0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, -1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, -1.0, 2.0, 0.0, 2.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, -0.5, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, -1.0, 1.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, -1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.5, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 1.0, 0.0, 1.0, 0.0],
        colouring: [0, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 2, 0, 0, 1, 2, 3],
        symmetry_group: "pgg",
        vertex_config: "3.3.3.4.4",
        ih_number: 23,
    },
    // 23: IH24, pmg, 3.3.3.4.4
    TilingTypeData {
        num_params: 4,
        num_aspects: 4,
        num_vertices: 5,
        num_edge_shapes: 4,
        edge_shapes: &[I, J, S, S],
        edge_orientations: &[false, false, false, false, false, false, false, false, false, true],
        edge_shape_ids: &[0, 1, 2, 3, 1],
        default_params: &[0.504426, 1.074838, 0.048436, 0.749256],
        tiling_vertex_coeffs: &[0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0],
        translation_vector_coeffs: &[0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 2.0, 0.0, 2.0, 0.0],
        aspect_xform_coeffs: &[0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, -1.0, 0.0, 2.0, 0.0, 2.0, 0.0, 0.0, 0.0, 0.0, 0.0, -1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, -1.0, 0.0, 1.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, -1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 1.0, 0.0, 1.0, 0.0],
        colouring: [0, 1, 1, 2, 0, 0, 0, 0, 0, 0, 0, 0, 1, 2, 0, 0, 1, 2, 3],
        symmetry_group: "pmg",
        vertex_config: "3.3.3.4.4",
        ih_number: 24,
    },
    // 24: IH26, cmm, 3.3.3.4.4
    TilingTypeData {
        num_params: 2,
        num_aspects: 2,
        num_vertices: 5,
        num_edge_shapes: 3,
        edge_shapes: &[S, I, I],
        edge_orientations: &[false, false, false, false, false, false, false, true, true, true],
        edge_shape_ids: &[0, 1, 2, 1, 0],
        default_params: &[2.002597, 0.836522],
        tiling_vertex_coeffs: &[0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 2.0, -1.7320508075688772, 0.5773502691896255, -0.577350269189626, 1.0, 1.0, 1.0, -1.7320508075688772, 0.5773502691896257, 1.1547005383792512, -2.0, 1.0, 0.0, 0.0, 0.0, 1.732050807568877, -2.0, 0.0, 1.0, 0.0],
        translation_vector_coeffs: &[0.0, -1.732050807568877, 3.0, 0.0, 1.0, -1.7320508075688772, 1.1547005383792512, -1.1547005383792512, 1.0, 2.0, 0.0, -1.7320508075688772],
        aspect_xform_coeffs: &[0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, -1.0, 0.0, 0.0, 0.0, 1.1547005383792512, 0.5773502691896257, -1.0, 0.0, 0.0, 0.0, 0.0, 0.0, -1.0, 2.0, 1.0, -1.7320508075688772],
        colouring: [0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 2, 0, 0, 1, 2, 3],
        symmetry_group: "cmm",
        vertex_config: "3.3.3.4.4",
        ih_number: 26,
    },
    // 25: IH27, pgg, 3.3.4.3.4
    TilingTypeData {
        num_params: 3,
        num_aspects: 4,
        num_vertices: 5,
        num_edge_shapes: 3,
        edge_shapes: &[S, J, J],
        edge_orientations: &[false, false, false, false, false, false, true, true, true, true],
        edge_shape_ids: &[0, 1, 2, 1, 2],
        default_params: &[1.883484, -0.654249, 1.173264],
        tiling_vertex_coeffs: &[0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 2.0, 2.0, -1.0, 1.0, 0.0, -1.0, 1.0, 1.0, 1.0, 0.0, 0.0, 1.0, 0.0, -2.0, 1.0, 1.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0],
        translation_vector_coeffs: &[0.0, -2.0, 0.0, 1.0, 0.0, 2.0, 0.0, -1.0, 2.0, 0.0, -2.0, 1.0, 2.0, 0.0, -2.0, 1.0],
        aspect_xform_coeffs: &[0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, -1.0, 0.0, 0.0, 0.0, 0.0, 2.0, 2.0, -2.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, -1.0, 2.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, -1.0, 1.0, 2.0, 0.0, 0.0, 0.0, 0.0, 0.0, -1.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 1.0, 0.0, -2.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0],
        colouring: [0, 0, 1, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 2, 1, 2, 0, 3],
        symmetry_group: "pgg",
        vertex_config: "3.3.4.3.4",
        ih_number: 27,
    },
    // 26: IH28, p4, 3.3.4.3.4
    TilingTypeData {
        num_params: 2,
        num_aspects: 4,
        num_vertices: 5,
        num_edge_shapes: 3,
        edge_shapes: &[S, J, J],
        edge_orientations: &[false, false, false, false, false, true, false, false, false, true],
        edge_shape_ids: &[0, 1, 1, 2, 2],
        default_params: &[-0.717114, 1.180345],
        tiling_vertex_coeffs: &[0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.5, -1.0, 0.0, 0.5, 1.0, 1.0, 0.0, -1.0, 1.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0],
        translation_vector_coeffs: &[-2.0, 0.0, 1.0, 0.0, -2.0, 0.0, 0.0, 2.0, 0.0, -2.0, 0.0, 1.0],
        aspect_xform_coeffs: &[0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, -1.0, 0.0, 0.0, 0.0, 2.0, 2.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, -1.0, -2.0, 2.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, -1.0, 1.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, -1.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 1.0, 1.0, 0.0, 0.0, 0.0, -1.0, 0.0, 0.0, 0.0, -1.0, 1.0, 1.0],
        colouring: [0, 0, 1, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 2, 1, 2, 0, 3],
        symmetry_group: "p4",
        vertex_config: "3.3.4.3.4",
        ih_number: 28,
    },
    // 27: IH29, p4g, 3.3.4.3.4
    TilingTypeData {
        num_params: 1,
        num_aspects: 4,
        num_vertices: 5,
        num_edge_shapes: 2,
        edge_shapes: &[J, I],
        edge_orientations: &[false, false, false, true, false, false, true, true, true, false],
        edge_shape_ids: &[0, 0, 1, 0, 0],
        default_params: &[0.887137],
        tiling_vertex_coeffs: &[0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 2.0, -1.7320508075688774, -2.0, 2.732050807568878, 2.0, -0.7320508075688776, 2.7320508075688794, -2.0, -0.7320508075688783, 2.0, 1.7320508075688783, -2.0, 1.0, 0.0],
        translation_vector_coeffs: &[-2.7320508075688785, 4.732050807568878, -0.7320508075688785, 1.2679491924311235, 0.7320508075688767, -1.2679491924311224, -2.7320508075688794, 4.7320508075688785],
        aspect_xform_coeffs: &[0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, -1.0, 2.7320508075688776, -2.0, 0.0, 1.0, 0.0, 0.0, -0.7320508075688781, 2.0, 0.0, 0.0, 0.0, 1.0, -2.0, 2.7320508075688776, 0.0, -1.0, 0.0, 0.0, 2.0, -0.7320508075688774, 0.0, 0.5, 0.0, -0.8660254037844386, 0.7320508075688772, 0.7320508075688772, 0.0, -0.8660254037844386, 0.0, -0.5, 1.267949192431123, 1.2679491924311228],
        colouring: [0, 2, 2, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 2, 1, 2, 0, 3],
        symmetry_group: "p4g",
        vertex_config: "3.3.4.3.4",
        ih_number: 29,
    },
    // 28: IH30, p31m, 3.4.6.4
    TilingTypeData {
        num_params: 1,
        num_aspects: 6,
        num_vertices: 4,
        num_edge_shapes: 3,
        edge_shapes: &[I, I, J],
        edge_orientations: &[false, false, false, false, false, false, false, true],
        edge_shape_ids: &[0, 1, 2, 2],
        default_params: &[0.541243],
        tiling_vertex_coeffs: &[0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, -1.732050807568877, 1.5, 3.0, -0.8660254037844386, -1.732050807568877, 1.0, 1.0, 0.0],
        translation_vector_coeffs: &[3.464101615137754, 0.0, 0.0, 0.0, 1.7320508075688767, 0.0, 3.0, 0.0],
        aspect_xform_coeffs: &[0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 1.7320508075688767, 0.0, 0.0, 0.0, 0.0, -1.0, 3.0, 0.0, 0.0, -0.5, 0.0, -0.8660254037844386, 0.0, 1.5, 0.0, -0.8660254037844386, 0.0, 0.5, 0.0, 0.8660254037844386, 0.0, -0.5, 0.0, -0.8660254037844386, 1.732050807568877, 1.5, 0.0, 0.8660254037844386, 0.0, -0.5, 3.0, -0.8660254037844385, 0.0, -0.5, 0.0, 0.8660254037844386, 0.0, 1.5, 0.0, -0.8660254037844386, 0.0, -0.5, 0.0, 0.8660254037844387, 0.0, -0.5, 0.0, 0.8660254037844386, 1.7320508075688763, 1.5, 0.0, 0.8660254037844386, 0.0, 0.5, 3.0, -0.8660254037844386],
        colouring: [0, 1, 2, 2, 1, 0, 0, 0, 0, 0, 0, 0, 0, 1, 2, 0, 1, 2, 3],
        symmetry_group: "p31m",
        vertex_config: "3.4.6.4",
        ih_number: 30,
    },
    // 29: IH31, p6, 3.4.6.4
    TilingTypeData {
        num_params: 0,
        num_aspects: 6,
        num_vertices: 4,
        num_edge_shapes: 2,
        edge_shapes: &[J, J],
        edge_orientations: &[false, false, false, true, false, false, false, true],
        edge_shape_ids: &[0, 0, 1, 1],
        default_params: &[],
        tiling_vertex_coeffs: &[0.0, 0.0, 1.0, 0.0, 1.5, 0.8660254037844386, 0.0, 1.7320508075688779],
        translation_vector_coeffs: &[3.0, 1.7320508075688772, -3.0, 1.732050807568878],
        aspect_xform_coeffs: &[1.0, 0.0, 0.0, 0.0, 1.0, 0.0, -0.5, -0.8660254037844386, 1.5, 0.8660254037844386, -0.5, 2.5980762113533165, -0.5, 0.8660254037844386, -1.5, -0.8660254037844386, -0.5, 2.598076211353317, 0.5, -0.8660254037844386, 1.5, 0.8660254037844386, 0.5, 0.8660254037844386, 0.5, 0.8660254037844386, -1.5, -0.8660254037844386, 0.5, 0.8660254037844389, -1.0, 0.0, 0.0, 0.0, -1.0, 3.4641016151377553],
        colouring: [0, 1, 2, 2, 1, 0, 0, 0, 0, 0, 0, 0, 0, 1, 2, 0, 1, 2, 3],
        symmetry_group: "p6",
        vertex_config: "3.4.6.4",
        ih_number: 31,
    },
    // 30: IH32, p6m, 3.4.6.4
    TilingTypeData {
        num_params: 0,
        num_aspects: 6,
        num_vertices: 4,
        num_edge_shapes: 2,
        edge_shapes: &[I, I],
        edge_orientations: &[false, false, false, false, false, true, false, true],
        edge_shape_ids: &[0, 1, 1, 0],
        default_params: &[],
        tiling_vertex_coeffs: &[0.0, 0.0, 1.0, 0.0, 1.0, 1.7320508075688774, -0.5, 0.8660254037844386],
        translation_vector_coeffs: &[3.0, 1.7320508075688772, -3.0, 1.7320508075688772],
        aspect_xform_coeffs: &[1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 1.0, 0.0, 0.0, 0.0, -1.0, 3.4641016151377544, -1.0, 0.0, -1.0, 0.0, 1.0, 1.7320508075688772, 0.5, 0.8660254037844386, -1.0, -0.8660254037844386, 0.5, 1.7320508075688772, -0.5, -0.8660254037844386, 3.0, 0.8660254037844386, -0.5, 1.7320508075688772, -1.0, 0.0, -1.0, 0.0, -1.0, 1.7320508075688772],
        colouring: [0, 1, 1, 2, 2, 0, 0, 0, 0, 0, 0, 0, 0, 1, 2, 0, 1, 2, 3],
        symmetry_group: "p6m",
        vertex_config: "3.4.6.4",
        ih_number: 32,
    },
    // 31: IH33, p3, 3.6.3.6
    TilingTypeData {
        num_params: 0,
        num_aspects: 3,
        num_vertices: 4,
        num_edge_shapes: 2,
        edge_shapes: &[J, J],
        edge_orientations: &[false, false, false, true, false, false, false, true],
        edge_shape_ids: &[0, 0, 1, 1],
        default_params: &[],
        tiling_vertex_coeffs: &[0.0, 0.0, 1.0, 0.0, 1.5, 0.8660254037844386, 0.5, 0.8660254037844386],
        translation_vector_coeffs: &[1.5, 0.8660254037844386, -1.5, 0.8660254037844386],
        aspect_xform_coeffs: &[1.0, 0.0, 0.0, 0.0, 1.0, 0.0, -0.5, -0.8660254037844386, 0.0, 0.8660254037844386, -0.5, 0.0, -0.5, 0.8660254037844386, 0.0, -0.8660254037844386, -0.5, 1.7320508075688772],
        colouring: [0, 1, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 2, 0, 1, 2, 3],
        symmetry_group: "p3",
        vertex_config: "3.6.3.6",
        ih_number: 33,
    },
    // 32: IH36, p31m, 3.6.3.6
    TilingTypeData {
        num_params: 0,
        num_aspects: 3,
        num_vertices: 4,
        num_edge_shapes: 1,
        edge_shapes: &[J],
        edge_orientations: &[false, false, false, true, true, true, true, false],
        edge_shape_ids: &[0, 0, 0, 0],
        default_params: &[],
        tiling_vertex_coeffs: &[0.0, 0.0, 1.0, 0.0, 1.5, 0.8660254037844386, 0.5, 0.8660254037844386],
        translation_vector_coeffs: &[1.5, 0.8660254037844386, -1.5, 0.8660254037844386],
        aspect_xform_coeffs: &[1.0, 0.0, 0.0, 0.0, 1.0, 0.0, -0.5, -0.8660254037844386, 0.0, 0.8660254037844386, -0.5, 0.0, -0.5, 0.8660254037844386, 0.0, -0.8660254037844386, -0.5, 1.7320508075688772],
        colouring: [0, 1, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 2, 0, 1, 2, 3],
        symmetry_group: "p31m",
        vertex_config: "3.6.3.6",
        ih_number: 36,
    },
    // 33: IH34, p6, 3.6.3.6
    TilingTypeData {
        num_params: 0,
        num_aspects: 3,
        num_vertices: 4,
        num_edge_shapes: 1,
        edge_shapes: &[J],
        edge_orientations: &[false, false, false, true, false, false, false, true],
        edge_shape_ids: &[0, 0, 0, 0],
        default_params: &[],
        tiling_vertex_coeffs: &[0.0, 0.0, 1.0, 0.0, 0.5, 0.8660254037844386, -0.5, 0.8660254037844386],
        translation_vector_coeffs: &[1.5, 0.8660254037844386, -1.5, 0.8660254037844388],
        aspect_xform_coeffs: &[1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.5, -0.8660254037844386, 0.5, 0.8660254037844386, 0.5, 0.8660254037844388, 0.5, 0.8660254037844386, 0.5, -0.8660254037844386, 0.5, 0.8660254037844386],
        colouring: [0, 1, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 2, 0, 1, 2, 3],
        symmetry_group: "p6",
        vertex_config: "3.6.3.6",
        ih_number: 34,
    },
    // 34: IH37, p6m, 3.6.3.6
    TilingTypeData {
        num_params: 0,
        num_aspects: 3,
        num_vertices: 4,
        num_edge_shapes: 1,
        edge_shapes: &[I],
        edge_orientations: &[false, false, false, true, true, true, false, true],
        edge_shape_ids: &[0, 0, 0, 0],
        default_params: &[],
        tiling_vertex_coeffs: &[0.0, 0.0, 1.0, 0.0, 0.5, 0.8660254037844386, -0.5, 0.8660254037844386],
        translation_vector_coeffs: &[1.5, 0.8660254037844386, -1.5, 0.8660254037844386],
        aspect_xform_coeffs: &[1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 1.0, 0.0, 0.0, 0.0, -1.0, 1.7320508075688772, 0.5, 0.8660254037844386, 0.5, -0.8660254037844386, 0.5, 0.8660254037844386],
        colouring: [0, 1, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 2, 0, 1, 2, 3],
        symmetry_group: "p6m",
        vertex_config: "3.6.3.6",
        ih_number: 37,
    },
    // 35: IH41, p1, 4.4.4.4
    TilingTypeData {
        num_params: 2,
        num_aspects: 1,
        num_vertices: 4,
        num_edge_shapes: 2,
        edge_shapes: &[J, J],
        edge_orientations: &[false, false, false, false, false, true, false, true],
        edge_shape_ids: &[0, 1, 0, 1],
        default_params: &[-0.048626, 0.993377],
        tiling_vertex_coeffs: &[0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 1.0, 0.0, 1.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0],
        translation_vector_coeffs: &[-1.0, 0.0, 0.0, 0.0, -1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0],
        aspect_xform_coeffs: &[0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0],
        colouring: [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 2, 1, 0, 2, 2],
        symmetry_group: "p1",
        vertex_config: "4.4.4.4",
        ih_number: 41,
    },
    // 36: IH43, pg, 4.4.4.4
    TilingTypeData {
        num_params: 2,
        num_aspects: 2,
        num_vertices: 4,
        num_edge_shapes: 2,
        edge_shapes: &[J, J],
        edge_orientations: &[false, false, false, false, true, true, false, true],
        edge_shape_ids: &[0, 1, 0, 1],
        default_params: &[0.020807, 0.966283],
        tiling_vertex_coeffs: &[0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 1.0, 0.0, 1.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0],
        translation_vector_coeffs: &[0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 2.0, 0.0],
        aspect_xform_coeffs: &[0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, -1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 1.0, 0.0],
        colouring: [0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 2, 0, 1, 2, 2],
        symmetry_group: "pg",
        vertex_config: "4.4.4.4",
        ih_number: 43,
    },
    // 37: IH44, pg, 4.4.4.4
    TilingTypeData {
        num_params: 2,
        num_aspects: 2,
        num_vertices: 4,
        num_edge_shapes: 2,
        edge_shapes: &[J, J],
        edge_orientations: &[false, false, true, true, false, false, true, true],
        edge_shape_ids: &[0, 0, 1, 1],
        default_params: &[0.037797, 0.999343],
        tiling_vertex_coeffs: &[0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 1.0, 1.0, -1.0, 1.0, 1.0, 0.0, 1.0, 1.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0],
        translation_vector_coeffs: &[-1.0, 0.0, 1.0, 1.0, 0.0, -1.0, 1.0, 1.0, 0.0, 1.0, 1.0, 0.0],
        aspect_xform_coeffs: &[0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0, -1.0, -1.0, 1.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, -1.0],
        colouring: [0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 2, 0, 1, 2, 2],
        symmetry_group: "pg",
        vertex_config: "4.4.4.4",
        ih_number: 44,
    },
    // 38: IH56, pm, 4.4.4.4
    TilingTypeData {
        num_params: 2,
        num_aspects: 2,
        num_vertices: 4,
        num_edge_shapes: 3,
        edge_shapes: &[I, J, I],
        edge_orientations: &[false, false, false, false, false, false, false, true],
        edge_shape_ids: &[0, 1, 2, 1],
        default_params: &[0.046591, 1.003182],
        tiling_vertex_coeffs: &[0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 1.0, 0.0, 1.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0],
        translation_vector_coeffs: &[0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 2.0, 0.0],
        aspect_xform_coeffs: &[0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, -1.0, 0.0, 2.0, 0.0],
        colouring: [0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 2, 0, 1, 2, 2],
        symmetry_group: "pm",
        vertex_config: "4.4.4.4",
        ih_number: 56,
    },
    // 39: IH66, pm, 4.4.4.4
    TilingTypeData {
        num_params: 1,
        num_aspects: 1,
        num_vertices: 4,
        num_edge_shapes: 2,
        edge_shapes: &[U, I],
        edge_orientations: &[false, false, false, false, true, true, false, true],
        edge_shape_ids: &[0, 1, 0, 1],
        default_params: &[1.012532],
        tiling_vertex_coeffs: &[0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0],
        translation_vector_coeffs: &[0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0],
        aspect_xform_coeffs: &[0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0],
        colouring: [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 2, 1, 0, 2, 2],
        symmetry_group: "pm",
        vertex_config: "4.4.4.4",
        ih_number: 66,
    },
    // 40: IH57, cm, 4.4.4.4
    TilingTypeData {
        num_params: 2,
        num_aspects: 2,
        num_vertices: 4,
        num_edge_shapes: 3,
        edge_shapes: &[I, J, I],
        edge_orientations: &[false, false, false, false, false, false, true, true],
        edge_shape_ids: &[0, 1, 2, 1],
        default_params: &[0.047207, 0.954784],
        tiling_vertex_coeffs: &[0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, -1.0, 0.0, 1.0, 0.0, 1.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0],
        translation_vector_coeffs: &[-1.0, 0.0, 1.0, 0.0, 1.0, 0.0, 1.0, 0.0, -1.0, 0.0, 1.0, 0.0],
        aspect_xform_coeffs: &[0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, -1.0, 0.0, 0.0, 0.0],
        colouring: [0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 2, 0, 1, 2, 2],
        symmetry_group: "cm",
        vertex_config: "4.4.4.4",
        ih_number: 57,
    },
    // 41: IH67, cm, 4.4.4.4
    TilingTypeData {
        num_params: 1,
        num_aspects: 1,
        num_vertices: 4,
        num_edge_shapes: 1,
        edge_shapes: &[J],
        edge_orientations: &[false, false, true, true, false, true, true, false],
        edge_shape_ids: &[0, 0, 0, 0],
        default_params: &[0.035646],
        tiling_vertex_coeffs: &[0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 1.0, 0.0, 1.0, 1.0, 1.0, 1.0, 1.0, 0.0, 0.0, 1.0],
        translation_vector_coeffs: &[0.0, 1.0, 1.0, 0.0, 1.0, 0.0, 0.0, 1.0],
        aspect_xform_coeffs: &[0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0],
        colouring: [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 2, 1, 0, 2, 2],
        symmetry_group: "cm",
        vertex_config: "4.4.4.4",
        ih_number: 67,
    },
    // 42: IH47, p2, 4.4.4.4
    TilingTypeData {
        num_params: 4,
        num_aspects: 2,
        num_vertices: 4,
        num_edge_shapes: 4,
        edge_shapes: &[S, S, S, S],
        edge_orientations: &[false, false, false, false, false, false, false, false],
        edge_shape_ids: &[0, 1, 2, 3],
        default_params: &[0.990491, 0.964841, 0.000609, 0.98492],
        tiling_vertex_coeffs: &[0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0],
        translation_vector_coeffs: &[1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, -1.0, 0.0, 0.0, 0.0, 1.0, 0.0],
        aspect_xform_coeffs: &[0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, -1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, -1.0, 0.0, 0.0, 0.0, 1.0, 0.0],
        colouring: [0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 2, 0, 1, 2, 2],
        symmetry_group: "p2",
        vertex_config: "4.4.4.4",
        ih_number: 47,
    },
    // 43: IH42, p2, 4.4.4.4
    TilingTypeData {
        num_params: 2,
        num_aspects: 1,
        num_vertices: 4,
        num_edge_shapes: 2,
        edge_shapes: &[S, S],
        edge_orientations: &[false, false, false, false, false, true, false, true],
        edge_shape_ids: &[0, 1, 0, 1],
        default_params: &[0.05503, 0.965131],
        tiling_vertex_coeffs: &[0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 1.0, 0.0, 1.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0],
        translation_vector_coeffs: &[1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, -1.0, 0.0, 0.0, 0.0],
        aspect_xform_coeffs: &[0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0],
        colouring: [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 2, 1, 0, 2, 2],
        symmetry_group: "p2",
        vertex_config: "4.4.4.4",
        ih_number: 42,
    },
    // 44: IH46, p2, 4.4.4.4
    TilingTypeData {
        num_params: 2,
        num_aspects: 2,
        num_vertices: 4,
        num_edge_shapes: 3,
        edge_shapes: &[S, J, S],
        edge_orientations: &[false, false, false, false, false, false, false, true],
        edge_shape_ids: &[0, 1, 2, 1],
        default_params: &[-0.046583, 1.036581],
        tiling_vertex_coeffs: &[0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 1.0, 0.0, 1.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0],
        translation_vector_coeffs: &[0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 2.0, 0.0, 0.0, 0.0, 2.0, 0.0],
        aspect_xform_coeffs: &[0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, -1.0, 0.0, 0.0, 0.0, 2.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, -1.0, 0.0, 2.0, 0.0],
        colouring: [0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 2, 0, 1, 2, 2],
        symmetry_group: "p2",
        vertex_config: "4.4.4.4",
        ih_number: 46,
    },
    // 45: IH52, pgg, 4.4.4.4
    TilingTypeData {
        num_params: 3,
        num_aspects: 4,
        num_vertices: 4,
        num_edge_shapes: 3,
        edge_shapes: &[S, J, S],
        edge_orientations: &[false, false, false, false, false, false, true, true],
        edge_shape_ids: &[0, 1, 2, 1],
        default_params: &[0.981701, -0.04919, 0.941685],
        tiling_vertex_coeffs: &[0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 1.0, 0.0, -1.0, 0.0, 0.0, -1.0, 0.0, 1.0, 1.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0],
        translation_vector_coeffs: &[0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 2.0, 0.0, 0.0, 2.0, 0.0, -2.0, 0.0, 0.0, 0.0, 0.0],
        aspect_xform_coeffs: &[0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, -1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, -1.0, 1.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, -1.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, -1.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, -1.0, 0.0, 0.0, 0.0, 0.0, 0.0, -1.0, 0.0, 2.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 1.0, 0.0],
        colouring: [0, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 2, 0, 1, 2, 2],
        symmetry_group: "pgg",
        vertex_config: "4.4.4.4",
        ih_number: 52,
    },
    // 46: IH53, pgg, 4.4.4.4
    TilingTypeData {
        num_params: 3,
        num_aspects: 4,
        num_vertices: 4,
        num_edge_shapes: 3,
        edge_shapes: &[S, S, J],
        edge_orientations: &[false, false, false, false, false, false, true, true],
        edge_shape_ids: &[0, 1, 2, 2],
        default_params: &[0.054071, 0.02627, 1.04589],
        tiling_vertex_coeffs: &[0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 1.0, 0.0, 0.0, 0.0, 0.0, 1.0, 1.0, 0.0, 0.0, 1.0, 1.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0],
        translation_vector_coeffs: &[0.0, 1.0, 1.0, 0.0, 0.0, 1.0, 1.0, 0.0, 1.0, 1.0, -1.0, -1.0, -1.0, -1.0, 1.0, 1.0],
        aspect_xform_coeffs: &[0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, -1.0, 0.0, 0.0, 0.0, 0.0, 1.0, 2.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, -1.0, 0.0, 0.0, 2.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, -1.0, 1.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, -1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 1.0],
        colouring: [0, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 2, 0, 1, 2, 2],
        symmetry_group: "pgg",
        vertex_config: "4.4.4.4",
        ih_number: 53,
    },
    // 47: IH45, pgg, 4.4.4.4
    TilingTypeData {
        num_params: 1,
        num_aspects: 2,
        num_vertices: 4,
        num_edge_shapes: 1,
        edge_shapes: &[J],
        edge_orientations: &[false, false, true, true, false, false, true, true],
        edge_shape_ids: &[0, 0, 0, 0],
        default_params: &[0.038771],
        tiling_vertex_coeffs: &[0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 1.0, 0.0, 1.0, 1.0, 1.0, 1.0, 1.0, 0.0, 0.0, 1.0],
        translation_vector_coeffs: &[-1.0, 1.0, 1.0, -1.0, 1.0, 1.0, 1.0, 1.0],
        aspect_xform_coeffs: &[0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0, -1.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, -1.0],
        colouring: [0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 2, 0, 1, 2, 2],
        symmetry_group: "pgg",
        vertex_config: "4.4.4.4",
        ih_number: 45,
    },
    // 48: IH51, pgg, 4.4.4.4
    TilingTypeData {
        num_params: 1,
        num_aspects: 4,
        num_vertices: 4,
        num_edge_shapes: 2,
        edge_shapes: &[J, J],
        edge_orientations: &[false, false, false, false, true, true, true, true],
        edge_shape_ids: &[0, 1, 0, 1],
        default_params: &[0.982832],
        tiling_vertex_coeffs: &[0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0],
        translation_vector_coeffs: &[0.0, 0.0, 2.0, 0.0, 0.0, -2.0, 0.0, 0.0],
        aspect_xform_coeffs: &[0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, -1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 1.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, -1.0, 1.0, 0.0, 0.0, -1.0, 0.0, 0.0, 0.0, 2.0, 0.0, 0.0, 0.0, -1.0, 2.0, 0.0],
        colouring: [0, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 2, 0, 1, 2, 2],
        symmetry_group: "pgg",
        vertex_config: "4.4.4.4",
        ih_number: 51,
    },
    // 49: IH54, pmg, 4.4.4.4
    TilingTypeData {
        num_params: 3,
        num_aspects: 4,
        num_vertices: 4,
        num_edge_shapes: 4,
        edge_shapes: &[I, S, I, S],
        edge_orientations: &[false, false, false, false, false, false, false, false],
        edge_shape_ids: &[0, 1, 2, 3],
        default_params: &[0.969808, -0.05323, 1.007325],
        tiling_vertex_coeffs: &[0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0],
        translation_vector_coeffs: &[0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 2.0, 0.0, -1.0, 1.0, 0.0, -1.0, 0.0, 0.0, 0.0, 0.0],
        aspect_xform_coeffs: &[0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, -1.0, 0.0, 0.0, 2.0, 0.0, 0.0, 0.0, 0.0, -1.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, -1.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, -1.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 1.0, 0.0],
        colouring: [0, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 2, 0, 1, 2, 2],
        symmetry_group: "pmg",
        vertex_config: "4.4.4.4",
        ih_number: 54,
    },
    // 50: IH58, pmg, 4.4.4.4
    TilingTypeData {
        num_params: 2,
        num_aspects: 2,
        num_vertices: 4,
        num_edge_shapes: 2,
        edge_shapes: &[I, S],
        edge_orientations: &[false, false, false, false, true, true, false, true],
        edge_shape_ids: &[0, 1, 0, 1],
        default_params: &[-0.013592, 1.005584],
        tiling_vertex_coeffs: &[0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 1.0, 0.0, 1.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0],
        translation_vector_coeffs: &[0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 2.0, 0.0],
        aspect_xform_coeffs: &[0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, -1.0, 0.0, 2.0, 0.0],
        colouring: [0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 2, 0, 1, 2, 2],
        symmetry_group: "pmg",
        vertex_config: "4.4.4.4",
        ih_number: 58,
    },
    // 51: IH59, pmg, 4.4.4.4
    TilingTypeData {
        num_params: 2,
        num_aspects: 2,
        num_vertices: 4,
        num_edge_shapes: 2,
        edge_shapes: &[S, S],
        edge_orientations: &[false, false, false, false, true, true, true, true],
        edge_shape_ids: &[0, 1, 1, 0],
        default_params: &[0.998627, -0.005781],
        tiling_vertex_coeffs: &[0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 1.0, 0.0, 1.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0],
        translation_vector_coeffs: &[1.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, -1.0, 0.0, -1.0, 1.0],
        aspect_xform_coeffs: &[0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, -1.0, 0.0, 0.0, 0.0, 1.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, -1.0, 1.0, 0.0, 1.0],
        colouring: [0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 2, 0, 1, 2, 2],
        symmetry_group: "pmg",
        vertex_config: "4.4.4.4",
        ih_number: 59,
    },
    // 52: IH61, pmg, 4.4.4.4
    TilingTypeData {
        num_params: 2,
        num_aspects: 4,
        num_vertices: 4,
        num_edge_shapes: 3,
        edge_shapes: &[I, J, S],
        edge_orientations: &[false, false, false, false, false, false, false, true],
        edge_shape_ids: &[0, 1, 2, 1],
        default_params: &[-0.058237, 1.051897],
        tiling_vertex_coeffs: &[0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 1.0, 0.0, 1.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0],
        translation_vector_coeffs: &[0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 4.0, 0.0],
        aspect_xform_coeffs: &[0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, -1.0, 0.0, 4.0, 0.0, 0.0, 0.0, -1.0, 0.0, 0.0, 0.0, 2.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, -1.0, 0.0, 2.0, 0.0, 0.0, 0.0, -1.0, 0.0, 0.0, 0.0, 2.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 2.0, 0.0],
        colouring: [0, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 2, 0, 1, 2, 2],
        symmetry_group: "pmg",
        vertex_config: "4.4.4.4",
        ih_number: 61,
    },
    // 53: IH68, pmg, 4.4.4.4
    TilingTypeData {
        num_params: 1,
        num_aspects: 2,
        num_vertices: 4,
        num_edge_shapes: 2,
        edge_shapes: &[U, S],
        edge_orientations: &[false, false, false, false, true, true, true, true],
        edge_shape_ids: &[0, 1, 0, 1],
        default_params: &[1.054946],
        tiling_vertex_coeffs: &[0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0],
        translation_vector_coeffs: &[0.0, 0.0, 1.0, 0.0, 0.0, -2.0, 0.0, 0.0],
        aspect_xform_coeffs: &[0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, -1.0, 0.0, 0.0, 0.0, 2.0, 0.0, 0.0, 0.0, -1.0, 1.0, 0.0],
        colouring: [0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 2, 0, 1, 2, 2],
        symmetry_group: "pmg",
        vertex_config: "4.4.4.4",
        ih_number: 68,
    },
    // 54: IH69, pmm, 4.4.4.4
    TilingTypeData {
        num_params: 1,
        num_aspects: 1,
        num_vertices: 4,
        num_edge_shapes: 2,
        edge_shapes: &[I, I],
        edge_orientations: &[false, false, false, false, true, true, true, true],
        edge_shape_ids: &[0, 1, 0, 1],
        default_params: &[1.042713],
        tiling_vertex_coeffs: &[0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0],
        translation_vector_coeffs: &[0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0],
        aspect_xform_coeffs: &[0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0],
        colouring: [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 2, 1, 0, 2, 2],
        symmetry_group: "pmm",
        vertex_config: "4.4.4.4",
        ih_number: 69,
    },
    // 55: IH62, cmm, 4.4.4.4
    TilingTypeData {
        num_params: 2,
        num_aspects: 2,
        num_vertices: 4,
        num_edge_shapes: 3,
        edge_shapes: &[I, S, I],
        edge_orientations: &[false, false, false, false, false, false, true, true],
        edge_shape_ids: &[0, 1, 2, 1],
        default_params: &[-0.004488, 0.987227],
        tiling_vertex_coeffs: &[0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, -1.0, 0.0, 1.0, 0.0, 1.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0],
        translation_vector_coeffs: &[-1.0, 0.0, 1.0, 0.0, 1.0, 0.0, 1.0, 0.0, -1.0, 0.0, 1.0, 0.0],
        aspect_xform_coeffs: &[0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, -1.0, 0.0, 2.0, 0.0],
        colouring: [0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 2, 0, 1, 2, 2],
        symmetry_group: "cmm",
        vertex_config: "4.4.4.4",
        ih_number: 62,
    },
    // 56: IH64, cmm, 4.4.4.4
    TilingTypeData {
        num_params: 2,
        num_aspects: 4,
        num_vertices: 4,
        num_edge_shapes: 4,
        edge_shapes: &[I, I, I, S],
        edge_orientations: &[false, false, false, false, false, false, false, false],
        edge_shape_ids: &[0, 1, 2, 3],
        default_params: &[0.004073, 0.979279],
        tiling_vertex_coeffs: &[0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 1.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0],
        translation_vector_coeffs: &[0.0, 0.0, 0.0, 0.0, 2.0, 0.0, 1.0, 0.0, -2.0, 0.0, -1.0, 0.0],
        aspect_xform_coeffs: &[0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, -1.0, 0.0, 2.0, 0.0, 0.0, 0.0, -1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 2.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 2.0, 0.0, 0.0, 0.0, -1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 2.0, 0.0, 0.0, 0.0, 0.0, 0.0, -1.0, 0.0, 2.0, 0.0],
        colouring: [0, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 2, 1, 0, 2, 2],
        symmetry_group: "cmm",
        vertex_config: "4.4.4.4",
        ih_number: 64,
    },
    // 57: IH71, cmm, 4.4.4.4
    TilingTypeData {
        num_params: 1,
        num_aspects: 1,
        num_vertices: 4,
        num_edge_shapes: 1,
        edge_shapes: &[S],
        edge_orientations: &[false, false, true, true, false, true, true, true],
        edge_shape_ids: &[0, 0, 0, 0],
        default_params: &[-0.018406],
        tiling_vertex_coeffs: &[0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 1.0, 0.0, 1.0, 1.0, 1.0, 1.0, 1.0, 0.0, 0.0, 1.0],
        translation_vector_coeffs: &[0.0, 1.0, 1.0, 0.0, 1.0, 0.0, 0.0, 1.0],
        aspect_xform_coeffs: &[0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0],
        colouring: [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 2, 1, 0, 2, 2],
        symmetry_group: "cmm",
        vertex_config: "4.4.4.4",
        ih_number: 71,
    },
    // 58: IH49, p4, 4.4.4.4
    TilingTypeData {
        num_params: 0,
        num_aspects: 1,
        num_vertices: 4,
        num_edge_shapes: 1,
        edge_shapes: &[S],
        edge_orientations: &[false, false, false, true, false, true, false, true],
        edge_shape_ids: &[0, 0, 0, 0],
        default_params: &[],
        tiling_vertex_coeffs: &[0.0, 0.0, 1.0, 0.0, 1.0, 1.0, 0.0, 1.0],
        translation_vector_coeffs: &[1.0, 0.0, 0.0, 1.0],
        aspect_xform_coeffs: &[1.0, 0.0, 0.0, 0.0, 1.0, 0.0],
        colouring: [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 2, 1, 0, 2, 2],
        symmetry_group: "p4",
        vertex_config: "4.4.4.4",
        ih_number: 49,
    },
    // 59: IH50, p4, 4.4.4.4
    TilingTypeData {
        num_params: 0,
        num_aspects: 2,
        num_vertices: 4,
        num_edge_shapes: 1,
        edge_shapes: &[J],
        edge_orientations: &[false, false, false, true, false, false, false, true],
        edge_shape_ids: &[0, 0, 0, 0],
        default_params: &[],
        tiling_vertex_coeffs: &[0.0, 0.0, 1.0, 0.0, 1.0, 1.0, 0.0, 1.0],
        translation_vector_coeffs: &[1.0, 1.0, -1.0, 1.0],
        aspect_xform_coeffs: &[1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, -1.0, 0.0, 1.0, 0.0, 0.0],
        colouring: [0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 2, 0, 1, 2, 2],
        symmetry_group: "p4",
        vertex_config: "4.4.4.4",
        ih_number: 50,
    },
    // 60: IH55, p4, 4.4.4.4
    TilingTypeData {
        num_params: 0,
        num_aspects: 4,
        num_vertices: 4,
        num_edge_shapes: 2,
        edge_shapes: &[J, J],
        edge_orientations: &[false, false, false, true, false, false, false, true],
        edge_shape_ids: &[0, 0, 1, 1],
        default_params: &[],
        tiling_vertex_coeffs: &[0.0, 0.0, 1.0, 0.0, 1.0, 1.0, 0.0, 1.0],
        translation_vector_coeffs: &[2.0, 0.0, 0.0, 2.0],
        aspect_xform_coeffs: &[1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, -1.0, 1.0, 1.0, 0.0, 1.0, 0.0, 1.0, 1.0, -1.0, 0.0, 1.0, -1.0, 0.0, 2.0, 0.0, -1.0, 2.0],
        colouring: [0, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 2, 0, 1, 2, 2],
        symmetry_group: "p4",
        vertex_config: "4.4.4.4",
        ih_number: 55,
    },
    // 61: IH72, p4g, 4.4.4.4
    TilingTypeData {
        num_params: 1,
        num_aspects: 8,
        num_vertices: 4,
        num_edge_shapes: 3,
        edge_shapes: &[I, I, J],
        edge_orientations: &[false, false, false, false, false, false, false, true],
        edge_shape_ids: &[0, 1, 2, 2],
        default_params: &[0.953931],
        tiling_vertex_coeffs: &[0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 2.0, -1.0, -1.0, 1.0, 1.0, 0.0],
        translation_vector_coeffs: &[2.0, 0.0, 2.0, 0.0, -2.0, 0.0, 2.0, 0.0],
        aspect_xform_coeffs: &[0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, -1.0, 0.0, 0.0, 0.0, -1.0, 0.0, 0.0, 0.0, 2.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, -1.0, 2.0, 1.0, 0.0, 1.0, 0.0, 0.0, 0.0, -1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 1.0, 0.0, -1.0, 0.0, 0.0, -2.0, 1.0, 0.0, -1.0, 0.0, 0.0, 0.0, 2.0, 0.0, 0.0, 0.0, -1.0, 0.0, 0.0, 0.0, 0.0, 0.0, -1.0, 2.0, 1.0, 0.0, -1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 1.0, 0.0, 1.0, 0.0, 0.0, 2.0, -1.0],
        colouring: [0, 1, 1, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 1, 2, 0, 1, 2, 2],
        symmetry_group: "p4g",
        vertex_config: "4.4.4.4",
        ih_number: 72,
    },
    // 62: IH73, p4g, 4.4.4.4
    TilingTypeData {
        num_params: 0,
        num_aspects: 2,
        num_vertices: 4,
        num_edge_shapes: 1,
        edge_shapes: &[U],
        edge_orientations: &[false, false, true, true, false, false, true, true],
        edge_shape_ids: &[0, 0, 0, 0],
        default_params: &[],
        tiling_vertex_coeffs: &[0.0, 0.0, 1.0, 0.0, 1.0, 1.0, 0.0, 1.0],
        translation_vector_coeffs: &[1.0, 1.0, -1.0, 1.0],
        aspect_xform_coeffs: &[1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 1.0, -1.0, 1.0, 0.0, 0.0],
        colouring: [0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 2, 0, 1, 2, 2],
        symmetry_group: "p4g",
        vertex_config: "4.4.4.4",
        ih_number: 73,
    },
    // 63: IH74, p4g, 4.4.4.4
    TilingTypeData {
        num_params: 0,
        num_aspects: 4,
        num_vertices: 4,
        num_edge_shapes: 1,
        edge_shapes: &[J],
        edge_orientations: &[false, false, false, true, true, true, true, false],
        edge_shape_ids: &[0, 0, 0, 0],
        default_params: &[],
        tiling_vertex_coeffs: &[0.0, 0.0, 1.0, 0.0, 1.0, 1.0, 0.0, 1.0],
        translation_vector_coeffs: &[2.0, 0.0, 0.0, 2.0],
        aspect_xform_coeffs: &[1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, -1.0, 1.0, 1.0, 0.0, 1.0, 0.0, 1.0, 1.0, -1.0, 0.0, 1.0, -1.0, 0.0, 2.0, 0.0, -1.0, 2.0],
        colouring: [0, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 2, 0, 1, 2, 2],
        symmetry_group: "p4g",
        vertex_config: "4.4.4.4",
        ih_number: 74,
    },
    // 64: IH76, p4m, 4.4.4.4
    TilingTypeData {
        num_params: 0,
        num_aspects: 1,
        num_vertices: 4,
        num_edge_shapes: 1,
        edge_shapes: &[I],
        edge_orientations: &[false, false, true, true, true, true, true, true],
        edge_shape_ids: &[0, 0, 0, 0],
        default_params: &[],
        tiling_vertex_coeffs: &[0.0, 0.0, 1.0, 0.0, 1.0, 1.0, 0.0, 1.0],
        translation_vector_coeffs: &[1.0, 0.0, 0.0, 1.0],
        aspect_xform_coeffs: &[1.0, 0.0, 0.0, 0.0, 1.0, 0.0],
        colouring: [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 2, 1, 0, 2, 2],
        symmetry_group: "p4m",
        vertex_config: "4.4.4.4",
        ih_number: 76,
    },
    // 65: IH38, p31m, 3.12.12
    TilingTypeData {
        num_params: 0,
        num_aspects: 6,
        num_vertices: 3,
        num_edge_shapes: 2,
        edge_shapes: &[I, J],
        edge_orientations: &[false, false, false, false, false, true],
        edge_shape_ids: &[0, 1, 1],
        default_params: &[],
        tiling_vertex_coeffs: &[0.0, 0.0, 1.0, 0.0, 0.5, 0.28867513459481287],
        translation_vector_coeffs: &[1.0, 0.0, 0.5, 0.8660254037844386],
        aspect_xform_coeffs: &[1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 1.0, 0.0, 0.5, 0.0, -1.0, 0.8660254037844386, -0.5, -0.8660254037844386, 1.0, 0.8660254037844386, -0.5, 0.0, -0.5, 0.8660254037844386, 0.5, -0.8660254037844386, -0.5, 0.8660254037844386, -0.5, -0.8660254037844386, 1.5, -0.8660254037844386, 0.5, 0.8660254037844386, -0.5, 0.8660254037844386, 1.0, 0.8660254037844386, 0.5, 0.0],
        colouring: [0, 1, 1, 2, 0, 2, 0, 0, 0, 0, 0, 0, 0, 1, 2, 0, 1, 2, 3],
        symmetry_group: "p31m",
        vertex_config: "3.12.12",
        ih_number: 38,
    },
    // 66: IH39, p6, 3.12.12
    TilingTypeData {
        num_params: 0,
        num_aspects: 6,
        num_vertices: 3,
        num_edge_shapes: 2,
        edge_shapes: &[S, J],
        edge_orientations: &[false, false, false, false, false, true],
        edge_shape_ids: &[0, 1, 1],
        default_params: &[],
        tiling_vertex_coeffs: &[0.0, 0.0, 1.0, 0.0, 0.5, 0.28867513459481287],
        translation_vector_coeffs: &[1.0, 0.0, 0.5, 0.8660254037844386],
        aspect_xform_coeffs: &[1.0, 0.0, 0.0, 0.0, 1.0, 0.0, -1.0, 0.0, 1.5, 0.0, -1.0, 0.8660254037844386, -0.5, -0.8660254037844386, 1.0, 0.8660254037844386, -0.5, 0.0, -0.5, 0.8660254037844386, 0.5, -0.8660254037844386, -0.5, 0.8660254037844386, 0.5, 0.8660254037844386, 0.5, -0.8660254037844386, 0.5, 0.8660254037844386, 0.5, -0.8660254037844386, 1.0, 0.8660254037844386, 0.5, 0.0],
        colouring: [0, 1, 1, 2, 2, 0, 0, 0, 0, 0, 0, 0, 0, 1, 2, 0, 1, 2, 3],
        symmetry_group: "p6",
        vertex_config: "3.12.12",
        ih_number: 39,
    },
    // 67: IH40, p6m, 3.12.12
    TilingTypeData {
        num_params: 0,
        num_aspects: 6,
        num_vertices: 3,
        num_edge_shapes: 2,
        edge_shapes: &[I, I],
        edge_orientations: &[false, false, false, false, false, true],
        edge_shape_ids: &[0, 1, 0],
        default_params: &[],
        tiling_vertex_coeffs: &[0.0, 0.0, 1.0, 0.0, -0.5, 0.8660254037844386],
        translation_vector_coeffs: &[1.5, 0.8660254037844386, -1.5, 0.8660254037844386],
        aspect_xform_coeffs: &[1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 1.0, 0.0, 0.0, 0.0, -1.0, 1.7320508075688772, 0.5, -0.8660254037844386, 0.5, -0.8660254037844386, -0.5, 0.8660254037844386, -0.5, -0.8660254037844386, 1.5, 0.8660254037844386, -0.5, 0.8660254037844386, 0.5, -0.8660254037844386, 0.5, 0.8660254037844386, 0.5, 0.8660254037844386, 0.5, 0.8660254037844386, 0.5, -0.8660254037844386, 0.5, 0.8660254037844386],
        colouring: [0, 1, 1, 2, 2, 0, 0, 0, 0, 0, 0, 0, 0, 1, 2, 0, 1, 2, 3],
        symmetry_group: "p6m",
        vertex_config: "3.12.12",
        ih_number: 40,
    },
    // 68: IH77, p6m, 4.6.12
    TilingTypeData {
        num_params: 0,
        num_aspects: 12,
        num_vertices: 3,
        num_edge_shapes: 3,
        edge_shapes: &[I, I, I],
        edge_orientations: &[false, false, false, false, false, false],
        edge_shape_ids: &[0, 1, 2],
        default_params: &[],
        tiling_vertex_coeffs: &[0.0, 0.0, 1.0, 0.0, 0.0, 1.7320508075688774],
        translation_vector_coeffs: &[3.0, 1.7320508075688772, -3.0, 1.7320508075688772],
        aspect_xform_coeffs: &[1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 1.0, 0.0, 0.0, 0.0, -1.0, 3.4641016151377544, -0.5, -0.8660254037844386, 1.5, -0.8660254037844386, 0.5, 0.8660254037844386, -1.0, 0.0, 0.0, 0.0, 1.0, 0.0, -0.5, -0.8660254037844386, 1.5, 0.8660254037844386, -0.5, 2.598076211353316, -1.0, 0.0, 0.0, 0.0, -1.0, 3.4641016151377544, -0.5, 0.8660254037844386, -1.5, -0.8660254037844386, -0.5, 2.598076211353316, 0.5, -0.8660254037844386, 1.5, 0.8660254037844386, 0.5, 0.8660254037844386, 0.5, 0.8660254037844386, -1.5, -0.8660254037844386, 0.5, 0.8660254037844386, -0.5, 0.8660254037844386, -1.5, 0.8660254037844386, 0.5, 0.8660254037844386, 0.5, -0.8660254037844386, 1.5, -0.8660254037844386, -0.5, 2.598076211353316, 0.5, 0.8660254037844386, -1.5, 0.8660254037844386, -0.5, 2.598076211353316],
        colouring: [0, 1, 1, 1, 0, 0, 0, 0, 0, 1, 1, 1, 0, 1, 2, 0, 1, 2, 2],
        symmetry_group: "p6m",
        vertex_config: "4.6.12",
        ih_number: 77,
    },
    // 69: IH78, cmm, 4.8.8
    TilingTypeData {
        num_params: 1,
        num_aspects: 4,
        num_vertices: 3,
        num_edge_shapes: 3,
        edge_shapes: &[I, I, S],
        edge_orientations: &[false, false, false, false, false, false],
        edge_shape_ids: &[0, 1, 2],
        default_params: &[0.972153],
        tiling_vertex_coeffs: &[0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 1.0, 0.0],
        translation_vector_coeffs: &[0.0, 1.0, 1.0, 0.0, 0.0, -1.0, 1.0, 0.0],
        aspect_xform_coeffs: &[0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, -1.0, 0.0, 0.0, 0.0, -1.0, 0.0, 0.0, 0.0, 2.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, -1.0, 0.0, 0.0, 0.0, 2.0, 0.0, 0.0, 0.0, -1.0, 0.0, 0.0],
        colouring: [0, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 2, 1, 0, 2, 2],
        symmetry_group: "cmm",
        vertex_config: "4.8.8",
        ih_number: 78,
    },
    // 70: IH79, p4, 4.8.8
    TilingTypeData {
        num_params: 0,
        num_aspects: 4,
        num_vertices: 3,
        num_edge_shapes: 2,
        edge_shapes: &[S, J],
        edge_orientations: &[false, false, false, false, false, true],
        edge_shape_ids: &[0, 1, 1],
        default_params: &[],
        tiling_vertex_coeffs: &[0.0, 0.0, 1.0, 0.0, 0.5, 0.5],
        translation_vector_coeffs: &[1.0, 0.0, 0.0, 1.0],
        aspect_xform_coeffs: &[1.0, 0.0, 0.0, 0.0, 1.0, 0.0, -1.0, 0.0, 1.0, 0.0, -1.0, 1.0, 0.0, -1.0, 1.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0, -1.0, 0.0, 1.0],
        colouring: [0, 0, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 2, 1, 0, 2, 2],
        symmetry_group: "p4",
        vertex_config: "4.8.8",
        ih_number: 79,
    },
    // 71: IH81, p4g, 4.8.8
    TilingTypeData {
        num_params: 0,
        num_aspects: 8,
        num_vertices: 3,
        num_edge_shapes: 2,
        edge_shapes: &[I, J],
        edge_orientations: &[false, false, false, false, false, true],
        edge_shape_ids: &[0, 1, 1],
        default_params: &[],
        tiling_vertex_coeffs: &[0.0, 0.0, 1.0, 0.0, 0.5, 0.5],
        translation_vector_coeffs: &[1.0, 1.0, -1.0, 1.0],
        aspect_xform_coeffs: &[1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 1.0, 0.0, 0.0, 0.0, -1.0, 0.0, 0.0, -1.0, 1.0, 1.0, 0.0, 0.0, 0.0, 1.0, 1.0, -1.0, 0.0, 0.0, 0.0, -1.0, 1.0, -1.0, 0.0, 0.0, 0.0, 1.0, 1.0, 1.0, 0.0, 0.0, -1.0, 0.0, 2.0, 0.0, -1.0, 0.0, -1.0, 0.0, 2.0, 0.0, 1.0, 0.0],
        colouring: [0, 1, 1, 1, 0, 0, 0, 1, 0, 0, 0, 0, 0, 1, 2, 0, 1, 2, 2],
        symmetry_group: "p4g",
        vertex_config: "4.8.8",
        ih_number: 81,
    },
    // 72: IH82, p4m, 4.8.8
    TilingTypeData {
        num_params: 0,
        num_aspects: 4,
        num_vertices: 3,
        num_edge_shapes: 2,
        edge_shapes: &[I, I],
        edge_orientations: &[false, false, false, false, false, true],
        edge_shape_ids: &[0, 1, 0],
        default_params: &[],
        tiling_vertex_coeffs: &[0.0, 0.0, 1.0, 0.0, 0.0, 1.0],
        translation_vector_coeffs: &[1.0, 1.0, -1.0, 1.0],
        aspect_xform_coeffs: &[1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 1.0, 0.0, -1.0, 0.0, -1.0, 1.0, 0.0, -1.0, 1.0, -1.0, 0.0, 1.0, 0.0, -1.0, 0.0, 1.0, 0.0, 0.0],
        colouring: [0, 0, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 2, 1, 0, 2, 2],
        symmetry_group: "p4m",
        vertex_config: "4.8.8",
        ih_number: 82,
    },
    // 73: IH90, cm, 6.6.6
    TilingTypeData {
        num_params: 1,
        num_aspects: 2,
        num_vertices: 3,
        num_edge_shapes: 2,
        edge_shapes: &[I, J],
        edge_orientations: &[false, false, false, false, true, true],
        edge_shape_ids: &[0, 1, 1],
        default_params: &[0.844667],
        tiling_vertex_coeffs: &[0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.5, 1.0, 0.0],
        translation_vector_coeffs: &[0.0, 0.5, 1.0, 0.0, 0.0, -0.5, 1.0, 0.0],
        aspect_xform_coeffs: &[0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, -1.0, 0.0, 0.0],
        colouring: [0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 2, 0, 1, 2, 2],
        symmetry_group: "cm",
        vertex_config: "6.6.6",
        ih_number: 90,
    },
    // 74: IH84, p2, 6.6.6
    TilingTypeData {
        num_params: 2,
        num_aspects: 2,
        num_vertices: 3,
        num_edge_shapes: 3,
        edge_shapes: &[S, S, S],
        edge_orientations: &[false, false, false, false, false, false],
        edge_shape_ids: &[0, 1, 2],
        default_params: &[0.530333, 0.848586],
        tiling_vertex_coeffs: &[0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0],
        translation_vector_coeffs: &[-1.0, 0.0, 1.0, 0.0, -1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0],
        aspect_xform_coeffs: &[0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, -1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, -1.0, 0.0, 1.0, 0.0],
        colouring: [0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 2, 0, 1, 2, 2],
        symmetry_group: "p2",
        vertex_config: "6.6.6",
        ih_number: 84,
    },
    // 75: IH86, pgg, 6.6.6
    TilingTypeData {
        num_params: 1,
        num_aspects: 4,
        num_vertices: 3,
        num_edge_shapes: 2,
        edge_shapes: &[S, J],
        edge_orientations: &[false, false, false, false, true, true],
        edge_shape_ids: &[0, 1, 1],
        default_params: &[0.816382],
        tiling_vertex_coeffs: &[0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.5, 1.0, 0.0],
        translation_vector_coeffs: &[0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 2.0, 0.0],
        aspect_xform_coeffs: &[0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, -1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, -1.0, 2.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, -0.5, 0.0, 0.0, 0.0, -1.0, 1.0, 0.0, 0.0, -1.0, 0.0, 0.0, 0.0, 0.5, 0.0, 0.0, 0.0, 1.0, 1.0, 0.0],
        colouring: [0, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 2, 0, 1, 2, 2],
        symmetry_group: "pgg",
        vertex_config: "6.6.6",
        ih_number: 86,
    },
    // 76: IH85, pmg, 6.6.6
    TilingTypeData {
        num_params: 2,
        num_aspects: 4,
        num_vertices: 3,
        num_edge_shapes: 3,
        edge_shapes: &[I, S, S],
        edge_orientations: &[false, false, false, false, false, false],
        edge_shape_ids: &[0, 1, 2],
        default_params: &[0.559805, 0.88651],
        tiling_vertex_coeffs: &[0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0],
        translation_vector_coeffs: &[0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 2.0, 0.0],
        aspect_xform_coeffs: &[0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, -1.0, 0.0, 2.0, 0.0, 0.0, 0.0, -1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, -1.0, 0.0, 1.0, 0.0, 0.0, 0.0, -1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 1.0, 0.0],
        colouring: [0, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 2, 0, 1, 2, 2],
        symmetry_group: "pmg",
        vertex_config: "6.6.6",
        ih_number: 85,
    },
    // 77: IH91, cmm, 6.6.6
    TilingTypeData {
        num_params: 1,
        num_aspects: 2,
        num_vertices: 3,
        num_edge_shapes: 2,
        edge_shapes: &[S, I],
        edge_orientations: &[false, false, false, false, true, true],
        edge_shape_ids: &[0, 1, 0],
        default_params: &[0.853302],
        tiling_vertex_coeffs: &[0.0, 0.0, 0.0, 0.0, 0.0, 1.0, -2.0, 1.7320508075688772, -1.7320508075688772, 2.0, 1.0, 0.0],
        translation_vector_coeffs: &[1.7320508075688772, -1.0, -3.0, 1.7320508075688772, 0.0, 1.0, -2.0, 1.7320508075688772],
        aspect_xform_coeffs: &[0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, -1.0, 0.0, 0.0, -1.7320508075688772, 2.0, 0.0, 0.0, 0.0, -1.0, 1.0, 0.0],
        colouring: [0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 2, 0, 1, 2, 2],
        symmetry_group: "cmm",
        vertex_config: "6.6.6",
        ih_number: 91,
    },
    // 78: IH83, p6, 6.6.6
    TilingTypeData {
        num_params: 0,
        num_aspects: 2,
        num_vertices: 3,
        num_edge_shapes: 1,
        edge_shapes: &[S],
        edge_orientations: &[false, false, false, true, false, true],
        edge_shape_ids: &[0, 0, 0],
        default_params: &[],
        tiling_vertex_coeffs: &[0.0, 0.0, 1.0, 0.0, 0.5, 0.8660254037844386],
        translation_vector_coeffs: &[1.0, 0.0, 0.5, 0.8660254037844386],
        aspect_xform_coeffs: &[1.0, 0.0, 0.0, 0.0, 1.0, 0.0, -1.0, 0.0, 1.5, 0.0, -1.0, 0.8660254037844386],
        colouring: [0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 2, 0, 1, 2, 2],
        symmetry_group: "p6",
        vertex_config: "6.6.6",
        ih_number: 83,
    },
    // 79: IH88, p6, 6.6.6
    TilingTypeData {
        num_params: 0,
        num_aspects: 6,
        num_vertices: 3,
        num_edge_shapes: 2,
        edge_shapes: &[S, J],
        edge_orientations: &[false, false, false, false, false, true],
        edge_shape_ids: &[0, 1, 1],
        default_params: &[],
        tiling_vertex_coeffs: &[0.0, 0.0, 1.0, 0.0, 0.5, 0.8660254037844386],
        translation_vector_coeffs: &[1.5, 0.8660254037844385, -1.5, 0.8660254037844386],
        aspect_xform_coeffs: &[1.0, 0.0, 0.0, 0.0, 1.0, 0.0, -1.0, 0.0, -0.5, 0.0, -1.0, 0.8660254037844386, 0.5, -0.8660254037844386, 1.0, 0.8660254037844386, 0.5, 0.0, 0.5, 0.8660254037844386, -0.5, -0.8660254037844386, 0.5, 0.8660254037844386, -0.5, 0.8660254037844386, 0.0, -0.8660254037844386, -0.5, 1.7320508075688772, -0.5, -0.8660254037844386, 0.0, 0.8660254037844386, -0.5, 0.0],
        colouring: [0, 1, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 2, 0, 1, 2, 2],
        symmetry_group: "p6",
        vertex_config: "6.6.6",
        ih_number: 88,
    },
    // 80: IH93, p6m, 6.6.6
    TilingTypeData {
        num_params: 0,
        num_aspects: 2,
        num_vertices: 3,
        num_edge_shapes: 1,
        edge_shapes: &[I],
        edge_orientations: &[false, false, true, true, true, true],
        edge_shape_ids: &[0, 0, 0],
        default_params: &[],
        tiling_vertex_coeffs: &[0.0, 0.0, 1.0, 0.0, 0.5, 0.8660254037844386],
        translation_vector_coeffs: &[1.0, 0.0, 0.5, 0.8660254037844386],
        aspect_xform_coeffs: &[1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 1.0, 0.0, 0.5, 0.0, -1.0, 0.8660254037844386],
        colouring: [0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 2, 0, 1, 2, 2],
        symmetry_group: "p6m",
        vertex_config: "6.6.6",
        ih_number: 93,
    },
];
