//! 质点物理模型
//!
//! 一维质点：平面在上方 `z_p` 处以平方反比力吸引，地面在 `z = 0`。
//! 两个接触边界都是刚性、非弹性的：到达时位置被钳位，朝边界外的速度分量被清零。

/// 质点物理状态
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PhysicalState {
    /// 高度 z（m）
    pub position: f64,

    /// 速度 v（m/s），向上为正
    pub velocity: f64,
}

impl PhysicalState {
    pub fn new(position: f64, velocity: f64) -> Self {
        Self { position, velocity }
    }

    /// 平面接触
    ///
    /// 若质点位于平面或其上方，吸附到平面并清除向上速度，返回 `true`。
    /// 每步独立判定，不保留接触状态。
    pub fn apply_plane_contact(&mut self, plane_height: f64) -> bool {
        if self.position < plane_height {
            return false;
        }
        self.position = plane_height;
        self.velocity = self.velocity.min(0.0);
        true
    }

    /// 半隐式欧拉积分：先更新速度，再用新速度更新位置
    pub fn integrate(&mut self, acceleration: f64, dt: f64) {
        self.velocity += acceleration * dt;
        self.position += self.velocity * dt;
    }

    /// 地面接触
    ///
    /// 若质点到达或穿过地面，钳位到 0 并清除向下速度，返回 `true`。
    pub fn apply_ground_contact(&mut self) -> bool {
        if self.position > 0.0 {
            return false;
        }
        self.position = 0.0;
        self.velocity = self.velocity.max(0.0);
        true
    }
}

/// 到平面的有效距离，不小于 `floor`
pub fn plane_distance(position: f64, plane_height: f64, floor: f64) -> f64 {
    (plane_height - position).max(floor)
}

/// 平面吸引力 `F_up = A / d²`
pub fn levitation_force(control_signal: f64, distance: f64) -> f64 {
    control_signal / (distance * distance)
}

/// 牛顿第二定律：`a = (F_up - m*g) / m`
pub fn net_acceleration(upward_force: f64, mass: f64, gravity: f64) -> f64 {
    let net_force = upward_force - mass * gravity;
    net_force / mass
}
