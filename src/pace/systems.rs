//! Pace domain: drives virtual time from the ramp.

use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use crate::pace::{PaceRamp, PaceReset, PaceTuning};

pub(crate) fn setup_pace(
    mut commands: Commands,
    tuning: Res<PaceTuning>,
    mut virtual_time: ResMut<Time<Virtual>>,
) {
    let ramp = PaceRamp::new(tuning.clone());
    virtual_time.set_relative_speed(ramp.multiplier());
    info!(
        "Pace ramp: {:.2}x, +{:.2} every {:.1}s up to {:.2}x",
        tuning.initial, tuning.step, tuning.interval, tuning.max
    );
    commands.insert_resource(ramp);
}

pub(crate) fn update_pace(
    real_time: Res<Time<Real>>,
    mut ramp: ResMut<PaceRamp>,
    mut resets: MessageReader<PaceReset>,
    mut virtual_time: ResMut<Time<Virtual>>,
) {
    if resets.read().count() > 0 {
        ramp.reset();
        virtual_time.set_relative_speed(ramp.multiplier());
        info!("Pace reset to {:.2}x", ramp.multiplier());
        return;
    }

    if ramp.tick(real_time.delta_secs()) {
        virtual_time.set_relative_speed(ramp.multiplier());
        debug!("Pace now {:.2}x", ramp.multiplier());
    }
}
