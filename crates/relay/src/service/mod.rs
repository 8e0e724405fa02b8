mod inquiry;

pub use self::inquiry::InquiryService;
