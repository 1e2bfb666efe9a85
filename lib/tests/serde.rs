#![cfg(feature = "serde")]

use lifegrid_lib::{Error, Grid, State, ALIVE, DEAD};
use std::{convert::TryFrom, error::Error as StdError};

#[test]
fn grid_json() -> Result<(), Box<dyn StdError>> {
    let grid = Grid::with_alive(2, 3, [(0, 1), (1, 2)])?;
    let json = serde_json::to_string(&grid)?;
    assert_eq!(json, r#"{"rows":2,"cols":3,"cells":[0,1,0,0,0,1]}"#);
    assert_eq!(serde_json::from_str::<Grid>(&json)?, grid);
    Ok(())
}

#[test]
fn too_few_cells() {
    let err = serde_json::from_str::<Grid>(r#"{"rows":3,"cols":3,"cells":[1]}"#)
        .map(|grid| grid.step());
    assert!(err.is_err());
    assert!(err
        .unwrap_err()
        .to_string()
        .contains(&Error::CellCountError(3, 3, 9, 1).to_string()));
}

#[test]
fn zero_columns() {
    let err = serde_json::from_str::<Grid>(r#"{"rows":2,"cols":0,"cells":[]}"#)
        .map(|grid| grid.to_string());
    assert!(err.is_err());
    assert!(err
        .unwrap_err()
        .to_string()
        .contains(&Error::InvalidDimension(2, 0).to_string()));
}

#[test]
fn invalid_state() {
    let err = serde_json::from_str::<Grid>(r#"{"rows":1,"cols":2,"cells":[2,1]}"#);
    assert!(err.is_err());
    assert!(err
        .unwrap_err()
        .to_string()
        .contains(&Error::InvalidState(2).to_string()));
}

#[test]
fn state_from_u8() {
    assert_eq!(State::try_from(0), Ok(DEAD));
    assert_eq!(State::try_from(1), Ok(ALIVE));
    assert_eq!(State::try_from(2), Err(Error::InvalidState(2)));
    assert_eq!(!DEAD, ALIVE);
    assert_eq!(!ALIVE, DEAD);
    assert_eq!(u8::from(!ALIVE), 0);
}
