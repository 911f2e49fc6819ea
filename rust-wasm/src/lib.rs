use modular_domains::complex::ExtendedPoint;
use modular_domains::congruence::{CongruenceSubgroup, CosetEnumerator, Level};
use modular_domains::domain::FundamentalDomain;
use modular_domains::moebius::Moebius;
use modular_domains::ModularError;
use wasm_bindgen::prelude::*;

pub mod common;
pub mod utils;


use common::{EdgeData, LocateData, MatrixData, PointData};
use utils::{to_js, to_js_error};

// Enable console logging and panic hooks for debugging
#[wasm_bindgen(start)]
pub fn main() {
    utils::set_panic_hook();
}

fn parse_subgroup(subgroup: &str) -> Result<CongruenceSubgroup, JsValue> {
    subgroup.parse().map_err(to_js_error)
}

fn parse_level(level: f64) -> Result<Level, JsValue> {
    Level::try_from(level).map_err(to_js_error)
}

/// Coset tiles of one congruence subgroup, the state the renderer keeps per level
#[wasm_bindgen]
pub struct WasmTessellation {
    subgroup: CongruenceSubgroup,
    level: Level,
    representatives: Vec<Moebius>,
    domain: FundamentalDomain,
}

impl WasmTessellation {
    fn representative(&self, index: usize) -> Result<&Moebius, JsValue> {
        self.representatives.get(index).ok_or_else(|| {
            to_js_error(ModularError::IndexOutOfRange {
                index,
                len: self.representatives.len(),
            })
        })
    }
}

#[wasm_bindgen]
impl WasmTessellation {
    /// Enumerate the cosets of `subgroup` ("gamma", "gamma0", "gamma1") at `level`
    #[wasm_bindgen(constructor)]
    pub fn new(subgroup: &str, level: f64) -> Result<WasmTessellation, JsValue> {
        let subgroup = parse_subgroup(subgroup)?;
        let level = parse_level(level)?;
        let representatives = CosetEnumerator::new(subgroup, level).enumerate();
        console_log!(
            "Enumerated {} cosets of {}({})",
            representatives.len(),
            subgroup,
            level
        );

        Ok(WasmTessellation {
            subgroup,
            level,
            representatives,
            domain: FundamentalDomain::standard(),
        })
    }

    /// Number of coset representatives (tiles)
    #[wasm_bindgen]
    pub fn len(&self) -> usize {
        self.representatives.len()
    }

    #[wasm_bindgen]
    pub fn is_empty(&self) -> bool {
        self.representatives.is_empty()
    }

    #[wasm_bindgen]
    pub fn level(&self) -> u32 {
        self.level.get()
    }

    #[wasm_bindgen]
    pub fn subgroup_name(&self) -> String {
        self.subgroup.to_string()
    }

    /// All representatives as `{a, b, c, d}` objects
    #[wasm_bindgen]
    pub fn representatives(&self) -> Result<JsValue, JsValue> {
        let matrices: Vec<MatrixData> = self.representatives.iter().map(|&m| m.into()).collect();
        to_js(&matrices, "representatives")
    }

    /// Corners of tile `index`, ready for the painter's polyline
    #[wasm_bindgen]
    pub fn tile_corners(&self, index: usize) -> Result<JsValue, JsValue> {
        let g = self.representative(index)?;
        let corners: Vec<PointData> = self.domain.tile(g).into_iter().map(Into::into).collect();
        to_js(&corners, "tile corners")
    }

    /// Boundary geodesics of tile `index`
    #[wasm_bindgen]
    pub fn tile_edges(&self, index: usize) -> Result<JsValue, JsValue> {
        let g = self.representative(index)?;
        let edges: Vec<EdgeData> = self.domain.tile_edges(g).into_iter().map(Into::into).collect();
        to_js(&edges, "tile edges")
    }

    /// Locate a point; `null` when it is outside the upper half-plane or cannot be reduced
    #[wasm_bindgen]
    pub fn locate(&self, re: f64, im: f64) -> Result<JsValue, JsValue> {
        let Ok(reduction) = self.domain.reduce(ExtendedPoint::finite(re, im)) else {
            return Ok(JsValue::NULL);
        };
        let tile = self
            .subgroup
            .find_coset_index(self.level, &self.representatives, &reduction.element);

        to_js(
            &LocateData {
                element: reduction.element.into(),
                tile,
                iterations: reduction.iterations,
            },
            "location",
        )
    }
}

/// Element g of the modular group with (re, im) inside g(F); `null` if there is none
#[wasm_bindgen]
pub fn find_coset_of(re: f64, im: f64) -> Result<JsValue, JsValue> {
    match FundamentalDomain::standard().find_coset_of(ExtendedPoint::finite(re, im)) {
        Some(g) => to_js(&MatrixData::from(g), "element"),
        None => Ok(JsValue::NULL),
    }
}

/// Corners of the standard fundamental domain
#[wasm_bindgen]
pub fn standard_domain_corners() -> Result<JsValue, JsValue> {
    let corners: Vec<PointData> = FundamentalDomain::standard()
        .corners()
        .iter()
        .map(|&c| c.into())
        .collect();
    to_js(&corners, "corners")
}

/// Number of cosets of `subgroup` at `level`, from the index formula
#[wasm_bindgen]
pub fn subgroup_index(subgroup: &str, level: f64) -> Result<f64, JsValue> {
    let subgroup = parse_subgroup(subgroup)?;
    let level = parse_level(level)?;
    Ok(subgroup.index(level) as f64)
}

/// Get the version of the library
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
