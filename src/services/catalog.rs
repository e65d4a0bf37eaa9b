//! 课程目录
//!
//! 固定的内存课程列表，运行期间不会修改。

use crate::models::CourseRecord;

static COURSES: [CourseRecord; 4] = [
    CourseRecord {
        id: 1,
        title: "Modern Teaching Techniques",
        description: "Online course to innovate your classes.",
    },
    CourseRecord {
        id: 2,
        title: "AI in Education",
        description: "Learn to integrate artificial intelligence into your classes.",
    },
    CourseRecord {
        id: 3,
        title: "Basic Educational Psychology",
        description: "Understand student behavior.",
    },
    CourseRecord {
        id: 4,
        title: "Didactics for Beginning Teachers",
        description: "Fundamentals for planning effective classes.",
    },
];

/// 全部课程
pub fn list_courses() -> &'static [CourseRecord] {
    &COURSES
}
