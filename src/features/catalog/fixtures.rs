//! Embedded sample catalog used while the storefront runs without a live
//! course table (`CATALOG_SOURCE=fixture`).
//!
//! One set per known category plus the early-bird promotional set. Counters
//! are seeded so listings look populated; they are not backed by purchases.

use chrono::Utc;
use lazy_static::lazy_static;
use uuid::Uuid;

use super::models::{Course, CourseLevel, CourseStatus};

#[allow(clippy::too_many_arguments)]
fn course(
    title: &str,
    description: &str,
    category: &str,
    price: i64,
    duration: i32,
    level: CourseLevel,
    student_count: i64,
    rating: f64,
) -> Course {
    let now = Utc::now();
    Course {
        id: Uuid::new_v4(),
        title: title.to_string(),
        description: description.to_string(),
        instructor: String::new(),
        category: Some(category.to_string()),
        status: CourseStatus::Published,
        published: true,
        price,
        original_price: price,
        duration: Some(duration),
        level,
        is_featured: false,
        tags: vec![category.to_string()],
        thumbnail_url: None,
        detail_image_url: None,
        is_early_bird: false,
        discount_percent: None,
        student_count,
        rating,
        review_count: student_count / 10,
        created_at: now,
        updated_at: now,
    }
}

fn early_bird(
    title: &str,
    description: &str,
    price: i64,
    original_price: i64,
    duration: i32,
    level: CourseLevel,
    student_count: i64,
) -> Course {
    let mut c = course(
        title,
        description,
        "early-bird",
        price,
        duration,
        level,
        student_count,
        4.7,
    );
    c.original_price = original_price;
    c.is_early_bird = true;
    c.discount_percent = Some(30);
    c.tags = vec!["early-bird".to_string()];
    c
}

lazy_static! {
    pub static ref FREE_COURSES: Vec<Course> = vec![
        course(
            "Earn a Side Income as an AI Photographer - Free Course",
            "Turn AI image tools into a photography side business. A step-by-step guide that beginners can follow from the first lesson.",
            "free", 0, 90, CourseLevel::Beginner, 1234, 4.8,
        ),
        course(
            "Extra Monthly Income with Zero Investment - Free Course",
            "Start a side hustle without spending a cent up front. Practical methods you can apply the same week.",
            "free", 0, 120, CourseLevel::Beginner, 987, 4.6,
        ),
        course(
            "Marketplace Automation Income - Free Course",
            "How sellers built six-figure storefronts with AI-assisted product sourcing. Hands-on walkthrough included.",
            "free", 0, 100, CourseLevel::Beginner, 2156, 4.7,
        ),
        course(
            "Cross-Border Dropshipping with AI Automation - Free Course",
            "Launch an overseas purchasing agency with automated listings. No prior experience required.",
            "free", 0, 110, CourseLevel::Beginner, 756, 4.5,
        ),
        course(
            "Referral Side Business for Complete Beginners - Free Course",
            "Monetize referrals step by step. An easy entry point for anyone starting from scratch.",
            "free", 0, 85, CourseLevel::Beginner, 1543, 4.4,
        ),
        course(
            "YouTube Channel Growth Crash Course - Free Special",
            "Field-tested tactics for growing a channel from zero subscribers. No filming gear needed to start.",
            "free", 0, 95, CourseLevel::Beginner, 2341, 4.6,
        ),
        course(
            "Affiliate Marketing from Zero to First Payout - Free Course",
            "Everything from affiliate basics to your first commission, in a staged guide beginners can follow.",
            "free", 0, 120, CourseLevel::Beginner, 1856, 4.5,
        ),
        course(
            "Affiliate Marketing Monetization, Cohort 4 - Free Course",
            "Monetization tactics with real case studies from previous cohorts. Intermediate pacing.",
            "free", 0, 150, CourseLevel::Intermediate, 3247, 4.7,
        ),
    ];

    pub static ref EARLY_BIRD_COURSES: Vec<Course> = vec![
        early_bird(
            "AI Marketing Automation Masterclass - 30% Off",
            "The complete playbook for automating campaigns with AI. Early-bird pricing for the first cohort.",
            70_000, 100_000, 180, CourseLevel::Intermediate, 456,
        ),
        early_bird(
            "Freelance Designer Income Maximization",
            "Pricing, positioning, and pipeline strategies that raise freelance design income. Early-bird special.",
            56_000, 80_000, 150, CourseLevel::Intermediate, 234,
        ),
        early_bird(
            "Reaching 100k YouTube Subscribers",
            "The growth system behind channels that crossed one hundred thousand subscribers. Limited early-bird price.",
            84_000, 120_000, 200, CourseLevel::Beginner, 789,
        ),
        early_bird(
            "A Business Model for Successful Online Stores",
            "Assortment, margins, and retention for a store that survives its first year. Early-bird special.",
            105_000, 150_000, 240, CourseLevel::Advanced, 345,
        ),
        early_bird(
            "Build Websites Without Writing Code",
            "Ship professional sites with no-code tools. Early-bird special for new students.",
            49_000, 70_000, 120, CourseLevel::Beginner, 567,
        ),
        early_bird(
            "Digital Marketing for Small Business Owners",
            "A practical marketing plan sized for a one-person shop. Limited early-bird price.",
            63_000, 90_000, 160, CourseLevel::Intermediate, 123,
        ),
    ];

    pub static ref PROGRAMMING_COURSES: Vec<Course> = vec![
        course(
            "Complete Web Development with React",
            "Build modern web applications with React, from components to deployment. Beginner friendly.",
            "programming", 89_000, 200, CourseLevel::Intermediate, 1234, 4.8,
        ),
        course(
            "Python Data Analysis Mastery",
            "Data analysis and visualization with Python, with techniques you can use at work immediately.",
            "programming", 75_000, 180, CourseLevel::Intermediate, 987, 4.7,
        ),
        course(
            "JavaScript from Basics to Advanced",
            "A systematic path through the language, from core concepts to advanced features.",
            "programming", 65_000, 150, CourseLevel::Beginner, 2156, 4.6,
        ),
    ];

    pub static ref DESIGN_COURSES: Vec<Course> = vec![
        course(
            "UI/UX Design with Figma",
            "Professional interface design in Figma, taught through real client-style projects.",
            "design", 95_000, 160, CourseLevel::Intermediate, 756, 4.7,
        ),
        course(
            "Adobe Photoshop Complete Guide",
            "Master every Photoshop workflow needed for professional image editing.",
            "design", 85_000, 140, CourseLevel::Beginner, 1543, 4.5,
        ),
        course(
            "Brand Identity Design",
            "Logos, stationery, and brand guidelines: building a complete identity system.",
            "design", 78_000, 120, CourseLevel::Intermediate, 892, 4.6,
        ),
    ];

    pub static ref MARKETING_COURSES: Vec<Course> = vec![
        course(
            "Digital Marketing Strategy",
            "Plan and execute digital campaigns that convert, from channel mix to measurement.",
            "marketing", 92_000, 170, CourseLevel::Intermediate, 1234, 4.6,
        ),
        course(
            "Google Ads Complete Guide",
            "Run profitable search and display campaigns with structured account management.",
            "marketing", 88_000, 130, CourseLevel::Intermediate, 987, 4.5,
        ),
        course(
            "Social Media Marketing Strategy",
            "Grow on Instagram, Facebook, and YouTube with a repeatable content system.",
            "marketing", 76_000, 110, CourseLevel::Beginner, 1456, 4.4,
        ),
    ];

    pub static ref BUSINESS_COURSES: Vec<Course> = vec![
        course(
            "Startup Founding Guide",
            "From idea validation to incorporation: the full path to launching a startup.",
            "business", 120_000, 240, CourseLevel::Advanced, 567, 4.7,
        ),
        course(
            "Freelancer Success Strategy",
            "Win clients and build sustainable income as an independent professional.",
            "business", 98_000, 180, CourseLevel::Intermediate, 789, 4.6,
        ),
        course(
            "Running an Online Store",
            "Operations, fulfillment, and customer service for a profitable online shop.",
            "business", 110_000, 200, CourseLevel::Intermediate, 634, 4.5,
        ),
    ];
}

/// Fixture set for a known category label, if one exists
pub fn category_set(category: &str) -> Option<&'static Vec<Course>> {
    match category {
        "free" => Some(&FREE_COURSES),
        "programming" => Some(&PROGRAMMING_COURSES),
        "design" => Some(&DESIGN_COURSES),
        "marketing" => Some(&MARKETING_COURSES),
        "business" => Some(&BUSINESS_COURSES),
        _ => None,
    }
}

/// Union of every fixture set, early-bird included
pub fn all_courses() -> Vec<Course> {
    FREE_COURSES
        .iter()
        .chain(EARLY_BIRD_COURSES.iter())
        .chain(PROGRAMMING_COURSES.iter())
        .chain(DESIGN_COURSES.iter())
        .chain(MARKETING_COURSES.iter())
        .chain(BUSINESS_COURSES.iter())
        .cloned()
        .collect()
}
