//! Code point to stroke-order sequence.
//!
//! Generated from stroke-order reference data, completed against Unihan
//! total stroke counts. Strokes are classified into the five classes
//! 1 horizontal, 2 vertical, 3 falling-left, 4 dot, 5 turning; the sequence
//! length is the character's stroke count. Entries are ordered by count.

use phf::phf_map;

/// Largest stroke count appearing in the table.
pub const MAX_STROKE: usize = 17;

pub(super) static STROKES: phf::Map<char, &'static str> = phf_map! {
    // 1 stroke
    '一' => "1",
    // 2 strokes
    '丁' => "12",
    '七' => "15",
    '二' => "11",
    '人' => "34",
    '儿' => "35",
    '入' => "34",
    '八' => "34",
    '几' => "35",
    '刀' => "53",
    '力' => "53",
    '十' => "12",
    // 3 strokes
    '三' => "111",
    '上' => "211",
    '下' => "124",
    '之' => "454",
    '久' => "354",
    '千' => "312",
    '口' => "251",
    '土' => "121",
    '大' => "134",
    '女' => "531",
    '子' => "521",
    '小' => "234",
    '山' => "252",
    '工' => "121",
    '己' => "515",
    '门' => "425",
    '马' => "551",
    '飞' => "534",
    // 4 strokes
    '不' => "1324",
    '中' => "2512",
    '书' => "5524",
    '五' => "1251",
    '井' => "1132",
    '今' => "3445",
    '仁' => "3211",
    '公' => "3454",
    '六' => "4134",
    '分' => "3453",
    '天' => "1134",
    '开' => "1132",
    '心' => "4544",
    '手' => "3112",
    '文' => "4134",
    '斗' => "4412",
    '斤' => "3312",
    '方' => "4153",
    '日' => "2511",
    '月' => "3511",
    '木' => "1234",
    '止' => "2121",
    '比' => "1535",
    '毛' => "3115",
    '气' => "3115",
    '水' => "2534",
    '火' => "4334",
    '爪' => "3324",
    '父' => "3434",
    '片' => "3215",
    '牙' => "1523",
    '牛' => "3112",
    '犬' => "1344",
    '王' => "1121",
    '瓦' => "1554",
    '见' => "2535",
    '车' => "1512",
    '长' => "3154",
    '风' => "3534",
    // 5 strokes
    '世' => "12215",
    '他' => "32525",
    '代' => "32154",
    '们' => "32425",
    '写' => "45151",
    '冬' => "35444",
    '出' => "52252",
    '北' => "21135",
    '古' => "12251",
    '叫' => "25152",
    '可' => "12512",
    '左' => "13121",
    '市' => "41252",
    '打' => "12112",
    '本' => "12341",
    '汉' => "44154",
    '玉' => "11214",
    '生' => "31121",
    '用' => "35112",
    '田' => "25121",
    '白' => "32511",
    '目' => "25111",
    '石' => "13251",
    '示' => "11234",
    '禾' => "31234",
    '立' => "41431",
    '鸟' => "35451",
    '龙' => "13534",
    // 6 strokes
    '先' => "312135",
    '光' => "243135",
    '共' => "122134",
    '动' => "115453",
    '名' => "354251",
    '地' => "121525",
    '好' => "531521",
    '字' => "445521",
    '年' => "311212",
    '红' => "551121",
    '老' => "121335",
    '而' => "132522",
    '耳' => "122111",
    '肉' => "253434",
    '自' => "325111",
    '至' => "154121",
    '臼' => "321511",
    '舌' => "312251",
    '舟' => "335414",
    '色' => "355215",
    '虫' => "251214",
    '血' => "325221",
    '行' => "332112",
    '衣' => "413534",
    '西' => "125351",
    '米' => "431234",
    '羊' => "431112",
    '竹' => "312312",
    '江' => "441121",
    '灯' => "433412",
    '问' => "425251",
    '齐' => "413234",
    // 7 strokes
    '串' => "2512512",
    '住' => "3241121",
    '作' => "3231211",
    '你' => "3235234",
    '张' => "5153154",
    '李' => "1234521",
    '条' => "3541234",
    '时' => "2511124",
    '花' => "1223235",
    '走' => "1212134",
    '足' => "2512134",
    '身' => "3251113",
    '辛' => "4143112",
    '里' => "2511211",
    '言' => "4111251",
    '谷' => "3434251",
    '豆' => "1251431",
    '麦' => "1121354",
    '龟' => "3525115",
    // 8 strokes
    '和' => "31234251",
    '国' => "25112141",
    '图' => "25354441",
    '店' => "41321251",
    '明' => "25113511",
    '学' => "44345521",
    '的' => "32511354",
    '金' => "34112431",
    '雨' => "12524444",
    '青' => "11212511",
    '非' => "21112111",
    '鱼' => "35251211",
    '河' => "44112512",
    '话' => "45312251",
    '其' => "12211134",
    '齿' => "21213452",
    // 9 strokes
    '南' => "122543112",
    '看' => "311325111",
    '秋' => "312344334",
    '美' => "431121134",
    '草' => "122251112",
    '语' => "451251251",
    '思' => "251214544",
    '面' => "132522111",
    '食' => "344511354",
    '首' => "431325111",
    '香' => "312342511",
    '树' => "123454124",
    '钟' => "311152512",
    '骨' => "255452511",
    '音' => "414312511",
    '革' => "122125112",
    // 10 strokes
    '哥' => "1251212512",
    '起' => "1212134515",
    '高' => "4125125251",
    '鬼' => "3251135554",
    '夏' => "1325111354",
    '钱' => "3111511534",
    // 11 strokes
    '黄' => "12212512134",
    '雪' => "12524444511",
    '鹿' => "41352211535",
    '麻' => "41312341234",
    // 12 strokes
    '黑' => "254312114444",
    '道' => "431325111454",
    '黍' => "312341342534",
    '鼎' => "251115132125",
    // 13 strokes
    '想' => "1234251114544",
    '新' => "4143112343312",
    '路' => "2512121354251",
    '鼓' => "1212514311254",
    '鼠' => "3215115445445",
    // 14 strokes
    '鼻' => "32511125121132",
    // 17 strokes
    '龠' => "34125122125125121",
};
