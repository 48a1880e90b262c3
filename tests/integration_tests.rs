use rand::{rngs::StdRng, Rng, SeedableRng};
use rocket_descent::{
    errors::SimulationError, ChuteState, Command, Deployment, LandingOutcome, Rocket, Round,
    SimulationConfig, MAX_WAIT_TICKS,
};

const MAX_TICKS: usize = 10_000;

// Plays a round that launches, then deploys `chute` the first turn it can.
fn run_round(fuel: &str, chute: Option<Command>) -> Result<Round, SimulationError> {
    let mut round = Round::start(fuel, &SimulationConfig::default())?;
    round.execute(Command::Thrust)?;

    for _ in 0..MAX_TICKS {
        if round.is_over() {
            break;
        }
        let command = match chute {
            Some(chute) if round.rocket.get_velocity() <= -100.0 => chute,
            _ => Command::Wait(1),
        };
        let turn = round.execute(command)?;

        if let Some(readout) = turn.readout {
            if turn.deployment == Some(Deployment::Opened) {
                println!(
                    "Chute opened | Alt: {:.1}m | Vel: {:.1}m/s",
                    readout.altitude, readout.velocity
                );
            }
        }
    }

    println!(
        "Round ended: {:?}\n{}",
        round.get_outcome(),
        round.get_telemetry().summary()
    );
    Ok(round)
}

#[test]
fn test_thrust_burns_all_fuel_for_any_amount() {
    let mut rng = StdRng::seed_from_u64(2024);
    let config = SimulationConfig::default();

    for _ in 0..200 {
        let fuel: u32 = rng.gen_range(0..2_000);
        let mut rocket = Rocket::new(fuel, &config);
        rocket.apply_thrust();

        assert_eq!(rocket.get_fuel(), 0, "fuel left after burning {fuel}");
        assert_eq!(
            rocket.get_velocity(),
            f64::from(fuel) * 20.0,
            "velocity after burning {fuel}"
        );
    }
}

#[test]
fn test_update_before_launch_changes_nothing() {
    let mut rng = StdRng::seed_from_u64(7);
    let config = SimulationConfig::default();

    for _ in 0..20 {
        let fuel: u32 = rng.gen_range(0..500);
        let mut rocket = Rocket::new(fuel, &config);
        for _ in 0..rng.gen_range(1..50) {
            rocket.update();
        }
        assert_eq!(rocket.get_altitude(), 0.0);
        assert_eq!(rocket.get_velocity(), 0.0);
        assert_eq!(rocket.get_fuel(), fuel);
    }
}

#[test]
fn test_altitude_never_negative() {
    let round = run_round("12", None).unwrap();
    assert_eq!(round.get_last_readout().altitude, 0.0);
    assert!(round.get_telemetry().get_max_altitude() > 0.0);
}

#[test]
fn test_low_fuel_cannot_reach_deploy_speed() {
    println!("INTEGRATION TEST: five units of fuel");

    let mut round = Round::start("5", &SimulationConfig::default()).unwrap();
    let turn = round.execute(Command::Thrust).unwrap();
    assert_eq!(turn.readout.unwrap().fuel, 0);
    assert!(
        round.rocket.get_velocity() < 100.0,
        "gravity already acted during the thrust turn"
    );

    let mut went_negative = false;
    while !round.is_over() {
        let turn = round.execute(Command::DeployParachute).unwrap();
        assert_eq!(turn.deployment, Some(Deployment::TooSlow));
        went_negative |= round.rocket.get_velocity() < 0.0;
    }

    assert!(went_negative, "gravity should turn the rocket around");
    assert!(!round.rocket.parachute.is_deployed());
    assert_eq!(round.get_outcome(), Some(LandingOutcome::CrashLanding));
}

#[test]
fn test_timely_parachute_lands_safely() {
    println!("INTEGRATION TEST: parachute landing");

    let round = run_round("7", Some(Command::DeployParachute)).unwrap();

    assert_eq!(round.get_outcome(), Some(LandingOutcome::SafeLanding));
    assert_eq!(round.rocket.get_velocity(), -4.0);
    assert!(round.rocket.parachute.is_deployed());
    assert_eq!(round.rocket.parachute.get_state(), ChuteState::Deployed);
    assert_eq!(round.rocket.prechute.get_health(), 100);
    assert!(round.rocket.parachute.get_health() >= 20);
}

#[test]
fn test_parachute_opened_too_high_wears_out() {
    println!("INTEGRATION TEST: parachute opened too high");

    let round = run_round("20", Some(Command::DeployParachute)).unwrap();

    assert_eq!(round.get_outcome(), Some(LandingOutcome::CrashLanding));
    assert_eq!(round.rocket.parachute.get_state(), ChuteState::Degraded);
    assert_eq!(round.rocket.parachute.get_slow_down_factor(), 0.0);
    assert_eq!(round.rocket.parachute.get_health(), 0);
}

#[test]
fn test_prechute_alone_does_not_save_the_rocket() {
    let round = run_round("7", Some(Command::DeployPrechute)).unwrap();

    assert_eq!(round.get_outcome(), Some(LandingOutcome::CrashLanding));
    assert!(round.rocket.prechute.is_deployed());
    assert!(!round.rocket.parachute.is_deployed());
    assert!(round.rocket.prechute.get_health() < 100);
}

#[test]
fn test_parachute_boost_and_per_tick_effect() {
    let mut round = Round::start("20", &SimulationConfig::default()).unwrap();
    round.execute(Command::Thrust).unwrap();
    while round.rocket.get_velocity() > -100.0 {
        round.execute(Command::Wait(1)).unwrap();
    }

    let before = round.rocket.get_velocity();
    round.rocket.deploy_parachute();
    assert_eq!(round.rocket.get_velocity(), before + 75.0);

    // A second request must not stack another boost.
    let turn = round.execute(Command::DeployParachute).unwrap();
    assert_eq!(turn.deployment, Some(Deployment::AlreadyDeployed));

    let mut previous = round.rocket.get_velocity();
    for _ in 0..30 {
        round.execute(Command::Wait(1)).unwrap();
        let velocity = round.rocket.get_velocity();
        assert!(velocity <= -4.0);
        assert!(
            velocity - previous <= 15.0,
            "chute term added more than its factor: {previous} -> {velocity}"
        );
        previous = velocity;
    }
}

#[test]
fn test_play_again_starts_fresh() {
    let first = run_round("5", None).unwrap();
    assert!(first.is_over());

    let second = Round::start("7", &SimulationConfig::default()).unwrap();
    assert!(!second.is_over());
    assert_eq!(second.rocket.get_fuel(), 7);
    assert_eq!(second.rocket.get_altitude(), 0.0);
    assert_eq!(second.rocket.parachute.get_health(), 100);
    assert_eq!(second.get_telemetry().get_ticks(), 1);
}

#[test]
fn test_invalid_fuel_reports_message() {
    let err = Round::start("ten", &SimulationConfig::default())
        .err()
        .expect("non-numeric fuel must be rejected");
    assert!(err.to_string().starts_with("Invalid fuel amount"));
}

#[test]
fn test_waiting_on_pad_is_capped_per_command() {
    let mut round = Round::start("3", &SimulationConfig::default()).unwrap();

    let huge = format!("wait {}", u32::MAX);
    assert!(matches!(
        huge.parse::<Command>(),
        Err(SimulationError::UnknownCommand(_))
    ));

    let longest = format!("wait {MAX_WAIT_TICKS}").parse::<Command>().unwrap();
    let turn = round.execute(longest).unwrap();
    assert_eq!(turn.ticks, MAX_WAIT_TICKS);
    assert_eq!(turn.outcome, None);
    assert_eq!(turn.readout.unwrap().fuel, 3);
}

#[test]
fn test_quit_abandons_the_round() {
    let mut round = Round::start("7", &SimulationConfig::default()).unwrap();
    round.execute(Command::Thrust).unwrap();

    let turn = round.execute("q".parse().unwrap()).unwrap();
    assert_eq!(turn.ticks, 0);
    assert!(round.is_abandoned());
    assert_eq!(round.get_outcome(), None);
    assert!(matches!(
        round.execute(Command::Thrust),
        Err(SimulationError::RoundOver)
    ));
}
