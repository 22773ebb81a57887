mod skill_data;
mod skill_range;
mod skill_shape;

pub use skill_data::SkillData;
pub use skill_range::SkillRange;
pub use skill_shape::SkillShape;
