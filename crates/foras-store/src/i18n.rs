use foras_types::models::{Language, OpportunityType};

/// Static locale table: (key, Arabic, English). Keys mirror the user
/// interface surface — navigation, explore, listing details, the post
/// form, the inbox, and layout chrome.
const TRANSLATIONS: &[(&str, &str, &str)] = &[
    ("appTitle", "فرص", "Foras"),
    ("navHome", "الرئيسية", "Home"),
    ("navExplore", "استكشف", "Explore"),
    ("navPost", "أضف فرصة", "Post Opportunity"),
    ("inbox", "صندوق الرسائل", "Inbox"),
    ("heroTitle", "اكتشف فرصتك القادمة", "Discover Your Next Opportunity"),
    (
        "heroSubtitle",
        "وظائف، تدريب، منح دراسية ودورات في مكان واحد",
        "Jobs, internships, scholarships and courses in one place",
    ),
    ("ctaSearch", "ابحث", "Search"),
    ("ctaExplore", "استكشف الفرص", "Explore Opportunities"),
    ("ctaPost", "أضف فرصة", "Post an Opportunity"),
    ("statsActive", "فرصة نشطة", "Active Opportunities"),
    ("statsOrgs", "منظمة مشاركة", "Partner Organizations"),
    ("statsSeekers", "باحث عن فرصة", "Opportunity Seekers"),
    ("latestOpps", "أحدث الفرص", "Latest Opportunities"),
    ("viewAll", "عرض الكل", "View All"),
    ("searchPlaceholder", "ابحث عن وظيفة أو منظمة...", "Search for a job or organization..."),
    ("allLocations", "كل المواقع", "All Locations"),
    ("filterResults", "نتائج البحث", "Results"),
    ("noResults", "لا توجد نتائج مطابقة", "No matching results"),
    ("categoryAll", "الكل", "All"),
    ("catJob", "وظائف", "Jobs"),
    ("catInternship", "تدريب", "Internships"),
    ("catScholarship", "منح دراسية", "Scholarships"),
    ("catCourse", "دورات", "Courses"),
    ("catVolunteer", "تطوع", "Volunteering"),
    ("details", "التفاصيل", "Details"),
    ("applyNow", "قدّم الآن", "Apply Now"),
    ("deadline", "آخر موعد للتقديم", "Deadline"),
    ("postedAt", "تاريخ النشر", "Posted"),
    ("salary", "الراتب", "Salary"),
    ("contactInfo", "معلومات التواصل", "Contact Information"),
    ("contactUs", "تواصل معنا", "Contact Us"),
    ("email", "البريد الإلكتروني", "Email"),
    ("phone", "الهاتف", "Phone"),
    ("sendMessage", "أرسل رسالة", "Send a Message"),
    ("namePlaceholder", "اسمك الكامل", "Your full name"),
    ("emailPlaceholder", "بريدك الإلكتروني", "Your email"),
    ("msgPlaceholder", "اكتب رسالتك هنا...", "Write your message here..."),
    ("send", "إرسال", "Send"),
    ("msgSentTitle", "تم إرسال رسالتك", "Message Sent"),
    ("msgSentDesc", "سيتواصل معك صاحب الفرصة قريباً", "The poster will get back to you soon"),
    ("sendAnother", "إرسال رسالة أخرى", "Send another message"),
    ("postTitle", "أضف فرصة جديدة", "Post a New Opportunity"),
    ("formTitle", "عنوان الفرصة", "Opportunity Title"),
    ("formOrg", "اسم المنظمة", "Organization Name"),
    ("formLoc", "الموقع", "Location"),
    ("formType", "نوع الفرصة", "Opportunity Type"),
    ("formDesc", "الوصف", "Description"),
    ("formDeadline", "آخر موعد للتقديم", "Application Deadline"),
    ("formSalary", "الراتب (اختياري)", "Salary (optional)"),
    ("formEmail", "بريد التواصل", "Contact Email"),
    ("formPhone", "هاتف التواصل", "Contact Phone"),
    ("formSubmit", "نشر الفرصة", "Publish Opportunity"),
    ("formSuccess", "تم نشر الفرصة بنجاح", "Opportunity published successfully"),
    ("noMessages", "لا توجد رسائل", "No messages"),
    (
        "noMessagesDesc",
        "عندما يتواصل معك المهتمون ستظهر رسائلهم هنا",
        "Messages from interested seekers will appear here",
    ),
    ("you", "أنت", "You"),
    ("replyPlaceholder", "اكتب ردك...", "Write your reply..."),
    ("aiAdvisor", "مستشار فرص", "Foras Advisor"),
    ("quickLinks", "روابط سريعة", "Quick Links"),
    (
        "footerDesc",
        "منصة تجمع الوظائف والتدريب والمنح والدورات في مكان واحد",
        "One platform for jobs, internships, scholarships and courses",
    ),
    ("rights", "جميع الحقوق محفوظة", "All rights reserved"),
];

pub fn lookup(language: Language, key: &str) -> Option<&'static str> {
    TRANSLATIONS
        .iter()
        .find(|(k, _, _)| *k == key)
        .map(|(_, ar, en)| match language {
            Language::Ar => *ar,
            Language::En => *en,
        })
}

/// Localized label for a listing category.
pub fn type_label(language: Language, kind: OpportunityType) -> &'static str {
    match (language, kind) {
        (Language::Ar, OpportunityType::Job) => "وظيفة",
        (Language::Ar, OpportunityType::Internship) => "تدريب",
        (Language::Ar, OpportunityType::Scholarship) => "منحة دراسية",
        (Language::Ar, OpportunityType::Course) => "دورة",
        (Language::Ar, OpportunityType::Volunteer) => "تطوع",
        (Language::En, OpportunityType::Job) => "Job",
        (Language::En, OpportunityType::Internship) => "Internship",
        (Language::En, OpportunityType::Scholarship) => "Scholarship",
        (Language::En, OpportunityType::Course) => "Course",
        (Language::En, OpportunityType::Volunteer) => "Volunteer",
    }
}
