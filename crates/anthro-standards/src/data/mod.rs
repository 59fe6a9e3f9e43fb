//! WHO Child Growth Standards LMS parameters, sampled at fixed breakpoints.
//!
//! Age-based tables: monthly from birth to 12 months, then 18, 24, 36, 48
//! and 60 months. From 24 months the length/height and BMI rows are the
//! standing-height values. Weight-for-height: every 5 cm from 45 to 120 cm,
//! recumbent length below 85 cm and standing height from 85 cm.

mod bmi_for_age;
mod head_circumference;
mod height_for_age;
mod weight_for_age;
mod weight_for_height;

use anthro_model::{Indicator, Sex};

use crate::table::Breakpoint;

pub(crate) type RawTable = (Indicator, Sex, &'static [Breakpoint]);

pub(crate) const BUILTIN_TABLES: [RawTable; 10] = [
    (Indicator::WeightForAge, Sex::Male, weight_for_age::BOYS),
    (Indicator::WeightForAge, Sex::Female, weight_for_age::GIRLS),
    (Indicator::HeightForAge, Sex::Male, height_for_age::BOYS),
    (Indicator::HeightForAge, Sex::Female, height_for_age::GIRLS),
    (Indicator::WeightForHeight, Sex::Male, weight_for_height::BOYS),
    (Indicator::WeightForHeight, Sex::Female, weight_for_height::GIRLS),
    (Indicator::BmiForAge, Sex::Male, bmi_for_age::BOYS),
    (Indicator::BmiForAge, Sex::Female, bmi_for_age::GIRLS),
    (Indicator::HeadCircumferenceForAge, Sex::Male, head_circumference::BOYS),
    (Indicator::HeadCircumferenceForAge, Sex::Female, head_circumference::GIRLS),
];
