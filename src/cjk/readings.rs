//! Code point to normalized phonetic reading.
//!
//! Generated from Unihan reading data (kMandarin, tone marks folded to
//! trailing digits, `ü` written `v`). Entries are ordered by reading.

use phf::phf_map;

pub(super) static READINGS: phf::Map<char, &'static str> = phf_map! {
    '八' => "ba1",
    '白' => "bai2",
    '北' => "bei3",
    '本' => "ben3",
    '鼻' => "bi2",
    '比' => "bi3",
    '不' => "bu4",
    '草' => "cao3",
    '长' => "chang2",
    '车' => "che1",
    '齿' => "chi3",
    '虫' => "chong2",
    '出' => "chu1",
    '串' => "chuan4",
    '打' => "da3",
    '大' => "da4",
    '代' => "dai4",
    '刀' => "dao1",
    '道' => "dao4",
    '的' => "de5",
    '灯' => "deng1",
    '地' => "di4",
    '店' => "dian4",
    '丁' => "ding1",
    '鼎' => "ding3",
    '冬' => "dong1",
    '动' => "dong4",
    '斗' => "dou4",
    '豆' => "dou4",
    '儿' => "er2",
    '而' => "er2",
    '耳' => "er3",
    '二' => "er4",
    '方' => "fang1",
    '飞' => "fei1",
    '非' => "fei1",
    '分' => "fen1",
    '风' => "feng1",
    '父' => "fu4",
    '高' => "gao1",
    '哥' => "ge1",
    '革' => "ge2",
    '工' => "gong1",
    '公' => "gong1",
    '共' => "gong4",
    '古' => "gu3",
    '谷' => "gu3",
    '骨' => "gu3",
    '鼓' => "gu3",
    '光' => "guang1",
    '龟' => "gui1",
    '鬼' => "gui3",
    '国' => "guo2",
    '汉' => "han4",
    '好' => "hao3",
    '禾' => "he2",
    '和' => "he2",
    '河' => "he2",
    '黑' => "hei1",
    '红' => "hong2",
    '花' => "hua1",
    '话' => "hua4",
    '黄' => "huang2",
    '火' => "huo3",
    '几' => "ji3",
    '己' => "ji3",
    '见' => "jian4",
    '江' => "jiang1",
    '叫' => "jiao4",
    '今' => "jin1",
    '斤' => "jin1",
    '金' => "jin1",
    '井' => "jing3",
    '久' => "jiu3",
    '臼' => "jiu4",
    '开' => "kai1",
    '看' => "kan4",
    '可' => "ke3",
    '口' => "kou3",
    '老' => "lao3",
    '李' => "li3",
    '里' => "li3",
    '力' => "li4",
    '立' => "li4",
    '六' => "liu4",
    '龙' => "long2",
    '鹿' => "lu4",
    '路' => "lu4",
    '麻' => "ma2",
    '马' => "ma3",
    '麦' => "mai4",
    '毛' => "mao2",
    '美' => "mei3",
    '门' => "men2",
    '们' => "men2",
    '米' => "mi3",
    '面' => "mian4",
    '名' => "ming2",
    '明' => "ming2",
    '木' => "mu4",
    '目' => "mu4",
    '南' => "nan2",
    '你' => "ni3",
    '年' => "nian2",
    '鸟' => "niao3",
    '牛' => "niu2",
    '女' => "nv3",
    '片' => "pian4",
    '七' => "qi1",
    '其' => "qi2",
    '齐' => "qi2",
    '起' => "qi3",
    '气' => "qi4",
    '千' => "qian1",
    '钱' => "qian2",
    '青' => "qing1",
    '秋' => "qiu1",
    '犬' => "quan3",
    '人' => "ren2",
    '仁' => "ren2",
    '日' => "ri4",
    '肉' => "rou4",
    '入' => "ru4",
    '三' => "san1",
    '色' => "se4",
    '山' => "shan1",
    '上' => "shang4",
    '舌' => "she2",
    '身' => "shen1",
    '生' => "sheng1",
    '十' => "shi2",
    '石' => "shi2",
    '时' => "shi2",
    '食' => "shi2",
    '世' => "shi4",
    '市' => "shi4",
    '示' => "shi4",
    '手' => "shou3",
    '首' => "shou3",
    '书' => "shu1",
    '黍' => "shu3",
    '鼠' => "shu3",
    '树' => "shu4",
    '水' => "shui3",
    '思' => "si1",
    '他' => "ta1",
    '天' => "tian1",
    '田' => "tian2",
    '条' => "tiao2",
    '图' => "tu2",
    '土' => "tu3",
    '瓦' => "wa3",
    '王' => "wang2",
    '文' => "wen2",
    '问' => "wen4",
    '五' => "wu3",
    '西' => "xi1",
    '下' => "xia4",
    '夏' => "xia4",
    '先' => "xian1",
    '香' => "xiang1",
    '想' => "xiang3",
    '小' => "xiao3",
    '写' => "xie3",
    '心' => "xin1",
    '辛' => "xin1",
    '新' => "xin1",
    '行' => "xing2",
    '学' => "xue2",
    '雪' => "xue3",
    '血' => "xue4",
    '牙' => "ya2",
    '言' => "yan2",
    '羊' => "yang2",
    '一' => "yi1",
    '衣' => "yi1",
    '音' => "yin1",
    '用' => "yong4",
    '鱼' => "yu2",
    '雨' => "yu3",
    '语' => "yu3",
    '玉' => "yu4",
    '月' => "yue4",
    '龠' => "yue4",
    '张' => "zhang1",
    '爪' => "zhao3",
    '之' => "zhi1",
    '止' => "zhi3",
    '至' => "zhi4",
    '中' => "zhong1",
    '钟' => "zhong1",
    '舟' => "zhou1",
    '竹' => "zhu2",
    '住' => "zhu4",
    '子' => "zi3",
    '字' => "zi4",
    '自' => "zi4",
    '走' => "zou3",
    '足' => "zu2",
    '左' => "zuo3",
    '作' => "zuo4",
};
