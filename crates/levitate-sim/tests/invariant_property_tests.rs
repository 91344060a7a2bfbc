//! 仿真不变量的属性测试
//!
//! 使用 proptest 在随机增益、目标和初始状态下验证：
//! - `0 <= z <= z_p`
//! - `A >= 0`
//! - 三个序列等长、时间轴为 `step * dt`

use levitate_sim::{SimulationConfig, Simulator, run};
use proptest::prelude::*;

fn arb_config() -> impl Strategy<Value = SimulationConfig> {
    (
        0.0..300.0f64,
        0.0..100.0f64,
        0.0..80.0f64,
        0.0..2.0f64,
        0.0..2.0f64,
        -5.0..5.0f64,
    )
        .prop_map(|(kp, ki, kd, target, z0, v0)| {
            SimulationConfig::default()
                .with_gains(kp, ki, kd)
                .with_target_height(target)
                .with_initial_state(z0, v0)
                .with_duration(3.0)
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// 位置始终在地面与平面之间
    #[test]
    fn position_stays_between_ground_and_plane(config in arb_config()) {
        let history = run(&config).unwrap();
        for &z in history.position() {
            prop_assert!(z >= 0.0, "z = {} below ground", z);
            prop_assert!(z <= config.plane_height, "z = {} above plane", z);
        }
    }

    /// 控制信号始终非负
    #[test]
    fn control_signal_is_non_negative(config in arb_config()) {
        let history = run(&config).unwrap();
        prop_assert!(history.control_signal().iter().all(|&a| a >= 0.0));
    }

    /// 序列等长，时间轴严格按步长递增
    #[test]
    fn sequences_are_aligned(config in arb_config()) {
        let history = run(&config).unwrap();
        prop_assert_eq!(history.len(), config.steps());
        prop_assert_eq!(history.time().len(), history.position().len());
        prop_assert_eq!(history.position().len(), history.control_signal().len());
        for (i, &t) in history.time().iter().enumerate() {
            prop_assert_eq!(t, i as f64 * config.dt);
        }
    }

    /// 接触钳位后不保留朝边界外的速度
    #[test]
    fn contact_clamps_remove_outward_velocity(config in arb_config()) {
        let mut sim = Simulator::new(&config).unwrap();
        for _ in 0..config.steps() {
            let report = sim.advance_detailed();
            if report.ground_contact {
                prop_assert_eq!(report.sample.position, 0.0);
                prop_assert!(report.velocity >= 0.0);
            } else if report.plane_reached {
                prop_assert_eq!(report.sample.position, config.plane_height);
                prop_assert!(report.velocity <= 0.0);
            }
        }
    }

    /// 同一配置重复运行结果一致
    #[test]
    fn repeated_runs_are_identical(config in arb_config()) {
        prop_assert_eq!(run(&config).unwrap(), run(&config).unwrap());
    }
}
