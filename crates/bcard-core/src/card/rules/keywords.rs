//! Static keyword tables used by the field extractors.
//!
//! Loaded once per process; there is no runtime customization.

/// Legal-entity tokens marking a company line: Korean corporate forms plus
/// the Latin abbreviations that show up on bilingual cards.
pub static LEGAL_ENTITY_TOKENS: &[&str] = &[
    "주식회사",
    "(주)",
    "㈜",
    "유한회사",
    "(유)",
    "합자회사",
    "(합)",
    "합명회사",
    "유한책임회사",
    "(유책)",
    "조합",
    "농업회사법인",
    "어업회사법인",
    "Co.",
    "Ltd",
    "Inc",
    "Corp",
    "Corporation",
    "Company",
    "Limited",
    "LLC",
    "LLP",
];

/// Job-title and seniority keywords.
pub static POSITION_KEYWORDS: &[&str] = &[
    "대표",
    "이사",
    "대표이사",
    "부장",
    "과장",
    "차장",
    "대리",
    "주임",
    "사원",
    "팀장",
    "실장",
    "감사",
    "상무",
    "전무",
    "본부장",
    "센터장",
    "사업부장",
    "팀리더",
    "CEO",
    "CTO",
    "CFO",
    "Manager",
    "Director",
    "President",
    "Lead",
    "Senior",
    "Principal",
];

/// Organizational-unit suffixes.
pub static DEPARTMENT_KEYWORDS: &[&str] = &[
    "부",
    "팀",
    "실",
    "센터",
    "본부",
    "사업부",
    "Department",
    "Division",
];

/// Administrative-unit suffixes and building words found in addresses.
pub static ADDRESS_KEYWORDS: &[&str] = &[
    "시", "구", "동", "로", "길", "번지", "층", "호", "빌딩", "타워",
];

/// Common Korean family names. A short Hangul run is only accepted as a
/// personal name when its first syllable is in this set.
pub static SURNAMES: &[char] = &[
    '김', '이', '박', '최', '정', '강', '조', '윤', '장', '임', '한', '오', '서', '신', '권', '황',
    '안', '송', '류', '전', '홍', '고', '문', '양', '손', '배', '백', '허', '유', '남', '심', '노',
    '하', '곽', '성', '차', '주', '우', '구', '나', '민', '진', '지', '엄', '채', '원', '천', '방',
    '공', '현', '함', '변', '염', '여', '추', '도', '소', '석', '선', '설', '마', '길', '연', '위',
    '표', '명', '기', '반', '왕', '금', '옥', '육', '인', '맹', '제', '모', '탁', '국', '어', '은',
    '편', '용',
];

/// True if `text` contains any of the given keywords.
pub fn contains_any(text: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|keyword| text.contains(keyword))
}

/// True if `name` starts with a whitelisted family name.
pub fn starts_with_surname(name: &str) -> bool {
    name.chars().next().is_some_and(|c| SURNAMES.contains(&c))
}

/// Position keywords as a regex alternation, longest keyword first so that
/// compound titles win over their prefixes (대표이사 before 대표).
pub fn position_alternation() -> String {
    let mut sorted: Vec<&str> = POSITION_KEYWORDS.to_vec();
    sorted.sort_by_key(|keyword| std::cmp::Reverse(keyword.chars().count()));
    sorted
        .iter()
        .map(|keyword| regex::escape(keyword))
        .collect::<Vec<_>>()
        .join("|")
}
