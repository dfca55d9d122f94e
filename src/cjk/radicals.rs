//! Radical classification tables.
//!
//! `RADICAL_STROKES` maps a code point to its (radical id, residual stroke
//! count) pair, generated from Unihan kRSUnicode data; the pair is directly
//! sortable. `RADICALS` lists the 214 traditional radicals in Kangxi order
//! with the simplified form where one exists.

use phf::phf_map;

/// Number of traditional radicals.
pub const MAX_RADICAL: usize = 214;

/// One radical: the traditional glyph plus its simplified form, if distinct.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Radical {
    /// Traditional (Kangxi) form
    pub origin: char,
    /// Simplified form, when one exists
    pub simplified: Option<char>,
}

const fn r(origin: char) -> Radical {
    Radical { origin, simplified: None }
}

const fn rs(origin: char, simplified: char) -> Radical {
    Radical { origin, simplified: Some(simplified) }
}

/// The 214 traditional radicals, indexed by radical id (slot 0 unused).
pub static RADICALS: [Radical; 215] = [
    r('\u{3007}'), // unused slot 0
    r('一'),       // 1
    r('丨'),       // 2
    r('丶'),       // 3
    r('丿'),       // 4
    r('乙'),       // 5
    r('亅'),       // 6
    r('二'),       // 7
    r('亠'),       // 8
    r('人'),       // 9
    r('儿'),       // 10
    r('入'),       // 11
    r('八'),       // 12
    r('冂'),       // 13
    r('冖'),       // 14
    r('冫'),       // 15
    r('几'),       // 16
    r('凵'),       // 17
    r('刀'),       // 18
    r('力'),       // 19
    r('勹'),       // 20
    r('匕'),       // 21
    r('匚'),       // 22
    r('匸'),       // 23
    r('十'),       // 24
    r('卜'),       // 25
    r('卩'),       // 26
    r('厂'),       // 27
    r('厶'),       // 28
    r('又'),       // 29
    r('口'),       // 30
    r('囗'),       // 31
    r('土'),       // 32
    r('士'),       // 33
    r('夂'),       // 34
    r('夊'),       // 35
    r('夕'),       // 36
    r('大'),       // 37
    r('女'),       // 38
    r('子'),       // 39
    r('宀'),       // 40
    r('寸'),       // 41
    r('小'),       // 42
    r('尢'),       // 43
    r('尸'),       // 44
    r('屮'),       // 45
    r('山'),       // 46
    r('巛'),       // 47
    r('工'),       // 48
    r('己'),       // 49
    r('巾'),       // 50
    r('干'),       // 51
    r('幺'),       // 52
    r('广'),       // 53
    r('廴'),       // 54
    r('廾'),       // 55
    r('弋'),       // 56
    r('弓'),       // 57
    r('彐'),       // 58
    r('彡'),       // 59
    r('彳'),       // 60
    r('心'),       // 61
    r('戈'),       // 62
    rs('戶', '户'), // 63
    r('手'),       // 64
    r('支'),       // 65
    r('攴'),       // 66
    r('文'),       // 67
    r('斗'),       // 68
    r('斤'),       // 69
    r('方'),       // 70
    r('无'),       // 71
    r('日'),       // 72
    r('曰'),       // 73
    r('月'),       // 74
    r('木'),       // 75
    r('欠'),       // 76
    r('止'),       // 77
    r('歹'),       // 78
    r('殳'),       // 79
    r('毋'),       // 80
    r('比'),       // 81
    r('毛'),       // 82
    r('氏'),       // 83
    r('气'),       // 84
    r('水'),       // 85
    r('火'),       // 86
    r('爪'),       // 87
    r('父'),       // 88
    r('爻'),       // 89
    r('爿'),       // 90
    r('片'),       // 91
    r('牙'),       // 92
    r('牛'),       // 93
    r('犬'),       // 94
    r('玄'),       // 95
    r('玉'),       // 96
    r('瓜'),       // 97
    r('瓦'),       // 98
    r('甘'),       // 99
    r('生'),       // 100
    r('用'),       // 101
    r('田'),       // 102
    r('疋'),       // 103
    r('疒'),       // 104
    r('癶'),       // 105
    r('白'),       // 106
    r('皮'),       // 107
    r('皿'),       // 108
    r('目'),       // 109
    r('矛'),       // 110
    r('矢'),       // 111
    r('石'),       // 112
    r('示'),       // 113
    r('禸'),       // 114
    r('禾'),       // 115
    r('穴'),       // 116
    r('立'),       // 117
    r('竹'),       // 118
    r('米'),       // 119
    r('糸'),       // 120
    r('缶'),       // 121
    r('网'),       // 122
    r('羊'),       // 123
    r('羽'),       // 124
    r('老'),       // 125
    r('而'),       // 126
    r('耒'),       // 127
    r('耳'),       // 128
    r('聿'),       // 129
    r('肉'),       // 130
    r('臣'),       // 131
    r('自'),       // 132
    r('至'),       // 133
    r('臼'),       // 134
    r('舌'),       // 135
    r('舛'),       // 136
    r('舟'),       // 137
    r('艮'),       // 138
    r('色'),       // 139
    r('艸'),       // 140
    r('虍'),       // 141
    r('虫'),       // 142
    r('血'),       // 143
    r('行'),       // 144
    r('衣'),       // 145
    r('襾'),       // 146
    rs('見', '见'), // 147
    r('角'),       // 148
    r('言'),       // 149
    r('谷'),       // 150
    r('豆'),       // 151
    r('豕'),       // 152
    r('豸'),       // 153
    rs('貝', '贝'), // 154
    r('赤'),       // 155
    r('走'),       // 156
    r('足'),       // 157
    r('身'),       // 158
    rs('車', '车'), // 159
    r('辛'),       // 160
    r('辰'),       // 161
    r('辵'),       // 162
    r('邑'),       // 163
    r('酉'),       // 164
    r('釆'),       // 165
    r('里'),       // 166
    r('金'),       // 167
    rs('長', '长'), // 168
    rs('門', '门'), // 169
    r('阜'),       // 170
    r('隶'),       // 171
    r('隹'),       // 172
    r('雨'),       // 173
    rs('靑', '青'), // 174
    r('非'),       // 175
    r('面'),       // 176
    r('革'),       // 177
    rs('韋', '韦'), // 178
    r('韭'),       // 179
    r('音'),       // 180
    rs('頁', '页'), // 181
    rs('風', '风'), // 182
    rs('飛', '飞'), // 183
    r('食'),       // 184
    r('首'),       // 185
    r('香'),       // 186
    rs('馬', '马'), // 187
    r('骨'),       // 188
    r('高'),       // 189
    r('髟'),       // 190
    r('鬥'),       // 191
    r('鬯'),       // 192
    r('鬲'),       // 193
    r('鬼'),       // 194
    rs('魚', '鱼'), // 195
    rs('鳥', '鸟'), // 196
    rs('鹵', '卤'), // 197
    r('鹿'),       // 198
    rs('麥', '麦'), // 199
    r('麻'),       // 200
    rs('黃', '黄'), // 201
    r('黍'),       // 202
    r('黑'),       // 203
    r('黹'),       // 204
    rs('黽', '黾'), // 205
    r('鼎'),       // 206
    r('鼓'),       // 207
    r('鼠'),       // 208
    r('鼻'),       // 209
    rs('齊', '齐'), // 210
    rs('齒', '齿'), // 211
    rs('龍', '龙'), // 212
    rs('龜', '龟'), // 213
    r('龠'),       // 214
];

pub(super) static RADICAL_STROKES: phf::Map<char, (u8, u8)> = phf_map! {
    '一' => (1, 0),
    '丁' => (1, 1),
    '七' => (1, 1),
    '三' => (1, 2),
    '上' => (1, 2),
    '下' => (1, 2),
    '世' => (1, 4),
    '不' => (1, 3),
    '中' => (2, 3),
    '书' => (2, 3),
    '串' => (2, 6),
    '之' => (4, 2),
    '久' => (4, 2),
    '二' => (7, 0),
    '五' => (7, 2),
    '井' => (7, 2),
    '人' => (9, 0),
    '今' => (9, 2),
    '仁' => (9, 2),
    '他' => (9, 3),
    '代' => (9, 3),
    '们' => (9, 3),
    '住' => (9, 5),
    '作' => (9, 5),
    '你' => (9, 5),
    '儿' => (10, 0),
    '先' => (10, 4),
    '光' => (10, 4),
    '入' => (11, 0),
    '八' => (12, 0),
    '公' => (12, 2),
    '六' => (12, 2),
    '共' => (12, 4),
    '其' => (12, 6),
    '写' => (14, 3),
    '冬' => (15, 3),
    '几' => (16, 0),
    '出' => (17, 3),
    '刀' => (18, 0),
    '分' => (18, 2),
    '力' => (19, 0),
    '动' => (19, 4),
    '北' => (21, 3),
    '十' => (24, 0),
    '千' => (24, 1),
    '南' => (24, 7),
    '口' => (30, 0),
    '古' => (30, 2),
    '叫' => (30, 2),
    '可' => (30, 2),
    '名' => (30, 3),
    '和' => (30, 5),
    '哥' => (30, 7),
    '国' => (31, 5),
    '图' => (31, 5),
    '土' => (32, 0),
    '地' => (32, 3),
    '夏' => (35, 7),
    '大' => (37, 0),
    '天' => (37, 1),
    '女' => (38, 0),
    '好' => (38, 3),
    '子' => (39, 0),
    '字' => (39, 3),
    '学' => (39, 5),
    '小' => (42, 0),
    '山' => (46, 0),
    '工' => (48, 0),
    '左' => (48, 2),
    '己' => (49, 0),
    '市' => (50, 2),
    '年' => (51, 3),
    '店' => (53, 5),
    '开' => (55, 1),
    '张' => (57, 4),
    '心' => (61, 0),
    '思' => (61, 5),
    '想' => (61, 9),
    '手' => (64, 0),
    '打' => (64, 2),
    '文' => (67, 0),
    '斗' => (68, 0),
    '斤' => (69, 0),
    '新' => (69, 9),
    '方' => (70, 0),
    '日' => (72, 0),
    '时' => (72, 3),
    '明' => (72, 4),
    '月' => (74, 0),
    '木' => (75, 0),
    '本' => (75, 1),
    '李' => (75, 3),
    '条' => (75, 3),
    '树' => (75, 5),
    '止' => (77, 0),
    '比' => (81, 0),
    '毛' => (82, 0),
    '气' => (84, 0),
    '水' => (85, 0),
    '汉' => (85, 2),
    '江' => (85, 3),
    '河' => (85, 5),
    '火' => (86, 0),
    '灯' => (86, 2),
    '爪' => (87, 0),
    '父' => (88, 0),
    '片' => (91, 0),
    '牙' => (92, 0),
    '牛' => (93, 0),
    '犬' => (94, 0),
    '王' => (96, 0),
    '玉' => (96, 1),
    '瓦' => (98, 0),
    '生' => (100, 0),
    '用' => (101, 0),
    '田' => (102, 0),
    '白' => (106, 0),
    '的' => (106, 3),
    '目' => (109, 0),
    '看' => (109, 4),
    '石' => (112, 0),
    '示' => (113, 0),
    '禾' => (115, 0),
    '秋' => (115, 4),
    '立' => (117, 0),
    '竹' => (118, 0),
    '米' => (119, 0),
    '红' => (120, 3),
    '羊' => (123, 0),
    '美' => (123, 3),
    '老' => (125, 0),
    '而' => (126, 0),
    '耳' => (128, 0),
    '肉' => (130, 0),
    '自' => (132, 0),
    '至' => (133, 0),
    '臼' => (134, 0),
    '舌' => (135, 0),
    '舟' => (137, 0),
    '色' => (139, 0),
    '花' => (140, 4),
    '草' => (140, 6),
    '虫' => (142, 0),
    '血' => (143, 0),
    '行' => (144, 0),
    '衣' => (145, 0),
    '西' => (146, 0),
    '见' => (147, 0),
    '言' => (149, 0),
    '话' => (149, 6),
    '语' => (149, 7),
    '谷' => (150, 0),
    '豆' => (151, 0),
    '走' => (156, 0),
    '起' => (156, 3),
    '足' => (157, 0),
    '路' => (157, 6),
    '身' => (158, 0),
    '车' => (159, 0),
    '辛' => (160, 0),
    '道' => (162, 9),
    '里' => (166, 0),
    '金' => (167, 0),
    '钟' => (167, 4),
    '钱' => (167, 5),
    '长' => (168, 0),
    '门' => (169, 0),
    '问' => (169, 3),
    '雨' => (173, 0),
    '雪' => (173, 3),
    '青' => (174, 0),
    '非' => (175, 0),
    '面' => (176, 0),
    '革' => (177, 0),
    '音' => (180, 0),
    '风' => (182, 0),
    '飞' => (183, 0),
    '食' => (184, 0),
    '首' => (185, 0),
    '香' => (186, 0),
    '马' => (187, 0),
    '骨' => (188, 0),
    '高' => (189, 0),
    '鬼' => (194, 0),
    '鱼' => (195, 0),
    '鸟' => (196, 0),
    '鹿' => (198, 0),
    '麦' => (199, 0),
    '麻' => (200, 0),
    '黄' => (201, 0),
    '黍' => (202, 0),
    '黑' => (203, 0),
    '鼎' => (206, 0),
    '鼓' => (207, 0),
    '鼠' => (208, 0),
    '鼻' => (209, 0),
    '齐' => (210, 0),
    '齿' => (211, 0),
    '龙' => (212, 0),
    '龟' => (213, 0),
    '龠' => (214, 0),
};
