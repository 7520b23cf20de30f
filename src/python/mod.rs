//! Python bindings for the Kuba rules engine.
//!
//! # Quick Start
//!
//! ```python
//! import kuba_engine
//!
//! game = kuba_engine.KubaGame(("PlayerA", "W"), ("PlayerB", "B"))
//!
//! game.make_move("PlayerA", (6, 5), "F")   # True
//! game.make_move("PlayerA", (6, 5), "L")   # False: not PlayerA's turn
//! game.get_marble((5, 5))                  # "W"
//! game.get_marble_count()                  # (8, 8, 13)
//! ```

use pyo3::prelude::*;

mod py_game;

pub use py_game::*;

/// kuba_engine: rules engine for the Kuba marble-pushing game.
#[pymodule]
fn kuba_engine(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyKubaGame>()?;
    Ok(())
}
