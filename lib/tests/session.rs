use lifegrid_lib::{Config, Error, Grid, Session, Status};
use rand::{rngs::StdRng, SeedableRng};
use std::{error::Error as StdError, time::Duration};

#[test]
fn default_config() {
    let config = Config::default();
    assert_eq!((config.rows, config.cols), (30, 30));
    assert_eq!(config.death_threshold, 0.5);
    assert_eq!(config.interval(), Duration::from_millis(100));
    assert_eq!(config.validate(), Ok(()));
}

#[test]
fn default_session() -> Result<(), Box<dyn StdError>> {
    let session = Session::default();
    assert_eq!(session.config(), &Config::default());
    assert_eq!(session.grid(), &Grid::new(30, 30)?);
    assert_eq!(session.status(), Status::Idle);
    assert_eq!(session.generation(), 0);
    Ok(())
}

#[test]
fn invalid_config() {
    assert_eq!(
        Session::new(Config::new(0, 30)).err(),
        Some(Error::InvalidDimension(0, 30))
    );
    assert_eq!(
        Session::new(Config::default().set_death_threshold(2.0)).err(),
        Some(Error::InvalidThreshold(2.0))
    );
}

#[test]
fn idle_ticks() -> Result<(), Box<dyn StdError>> {
    let mut session = Session::new(Config::new(5, 5))?;
    assert_eq!(session.status(), Status::Idle);
    session.toggle(1, 2)?;
    session.toggle(2, 2)?;
    session.toggle(3, 2)?;
    let before = session.grid().clone();
    assert!(!session.tick());
    assert_eq!(session.grid(), &before);
    assert_eq!(session.generation(), 0);
    Ok(())
}

#[test]
fn run_and_stop() -> Result<(), Box<dyn StdError>> {
    let mut session = Session::new(Config::new(5, 5))?;
    for (row, col) in [(1, 2), (2, 2), (3, 2)] {
        session.toggle(row, col)?;
    }
    let vertical = session.grid().clone();

    session.start();
    assert!(session.is_running());
    assert!(session.tick());
    assert_eq!(session.grid(), &vertical.step());
    assert!(session.tick());
    assert_eq!(session.grid(), &vertical);
    assert_eq!(session.generation(), 2);
    assert_eq!(session.population(), 3);

    session.stop();
    assert!(!session.tick());
    assert_eq!(session.generation(), 2);

    assert_eq!(session.toggle_running(), Status::Running);
    assert_eq!(session.toggle_running(), Status::Idle);
    Ok(())
}

#[test]
fn toggle_while_running() -> Result<(), Box<dyn StdError>> {
    let mut session = Session::new(Config::new(4, 4))?;
    session.start();
    session.toggle(0, 0)?;
    session.toggle(0, 1)?;
    session.toggle(1, 0)?;
    assert!(session.tick());
    assert_eq!(
        session.grid(),
        &Grid::with_alive(4, 4, [(0, 0), (0, 1), (1, 0), (1, 1)])?
    );
    Ok(())
}

#[test]
fn rejected_toggle() -> Result<(), Box<dyn StdError>> {
    let mut session = Session::new(Config::new(3, 3))?;
    session.toggle(1, 1)?;
    let before = session.grid().clone();
    assert_eq!(session.toggle(3, 0), Err(Error::OutOfBounds(3, 0)));
    assert_eq!(session.grid(), &before);
    Ok(())
}

#[test]
fn clear_and_randomize() -> Result<(), Box<dyn StdError>> {
    let mut rng = StdRng::seed_from_u64(7);
    let mut session = Session::new(Config::default().set_death_threshold(0.1))?;
    session.randomize_with(&mut rng)?;
    let dense = session.population();
    assert!(dense > 0);

    session.start();
    session.tick();
    assert_eq!(session.generation(), 1);
    session.clear()?;
    assert_eq!(session.population(), 0);
    assert_eq!(session.generation(), 0);
    assert!(session.is_running());

    session.set_death_threshold(0.9)?;
    session.randomize_with(&mut rng)?;
    assert!(session.population() < dense);
    assert_eq!(session.generation(), 0);

    session.set_death_threshold(1.0)?;
    session.randomize()?;
    assert_eq!(session.population(), 0);
    Ok(())
}

#[test]
fn rejected_threshold() -> Result<(), Box<dyn StdError>> {
    let mut session = Session::new(Config::default())?;
    assert_eq!(
        session.set_death_threshold(1.1),
        Err(Error::InvalidThreshold(1.1))
    );
    assert_eq!(session.config().death_threshold, 0.5);
    Ok(())
}
